use std::{collections::BTreeSet, sync::Arc};

use littlespoon_shared::{AgeBand, MealType};
use serde::{Deserialize, Serialize};

use crate::{Favorites, Recipe};

/// Allergen toggles offered next to the recipe search.
pub const COMMON_ALLERGENS: &[&str] = &["Dairy", "Egg", "Nuts", "Soy", "Wheat", "Fish"];

/// Search and filter selections for the recipe bank.
///
/// Every field left at its default matches all recipes. Allergen exclusion
/// is a plain case-insensitive substring scan over ingredient names and the
/// full description, so a description that only mentions a term (for
/// instance "dairy-free") still excludes the recipe.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RecipeQuery {
    pub text: Option<String>,
    pub age_band: Option<AgeBand>,
    pub meal_type: Option<MealType>,
    pub favorites_only: bool,
    pub excluded_allergens: BTreeSet<String>,
}

impl RecipeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn age_band(mut self, band: AgeBand) -> Self {
        self.age_band = Some(band);
        self
    }

    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    pub fn exclude(mut self, term: impl Into<String>) -> Self {
        self.excluded_allergens.insert(term.into());
        self
    }

    pub fn matches(&self, recipe: &Recipe, favorites: &Favorites) -> bool {
        Matcher::new(self, favorites).matches(recipe)
    }
}

/// Query with its search terms lowercased once up front.
struct Matcher<'a> {
    text: Option<String>,
    age_band: Option<AgeBand>,
    meal_type: Option<MealType>,
    favorites: Option<&'a Favorites>,
    allergens: Vec<String>,
}

impl<'a> Matcher<'a> {
    fn new(query: &RecipeQuery, favorites: &'a Favorites) -> Self {
        Self {
            text: query
                .text
                .as_deref()
                .filter(|text| !text.is_empty())
                .map(str::to_lowercase),
            age_band: query.age_band,
            meal_type: query.meal_type,
            favorites: query.favorites_only.then_some(favorites),
            allergens: query
                .excluded_allergens
                .iter()
                .map(|term| term.to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe)
            && self.age_band.is_none_or(|band| recipe.suits(band))
            && self.meal_type.is_none_or(|meal_type| recipe.meal_type == meal_type)
            && self.favorites.is_none_or(|favorites| favorites.contains(&recipe.id))
            && !self.has_allergen(recipe)
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        let Some(text) = &self.text else {
            return true;
        };

        recipe.title.to_lowercase().contains(text)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(text))
    }

    fn has_allergen(&self, recipe: &Recipe) -> bool {
        if self.allergens.is_empty() {
            return false;
        }

        let description = recipe.full_description.to_lowercase();
        let names = recipe
            .ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect::<Vec<_>>();

        self.allergens.iter().any(|term| {
            description.contains(term.as_str()) || names.iter().any(|name| name.contains(term.as_str()))
        })
    }
}

/// Recipes matching every predicate of `query`, in catalog order.
pub fn filter<'r>(
    recipes: impl IntoIterator<Item = &'r Arc<Recipe>>,
    query: &RecipeQuery,
    favorites: &Favorites,
) -> Vec<Arc<Recipe>> {
    let matcher = Matcher::new(query, favorites);

    let found = recipes
        .into_iter()
        .filter(|recipe| matcher.matches(recipe))
        .cloned()
        .collect::<Vec<_>>();

    tracing::trace!(found = found.len(), ?query, "recipe filter applied");

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn ids(recipes: &[Arc<Recipe>]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let catalog = Catalog::builtin();
        let found = filter(&catalog, &RecipeQuery::new(), &Favorites::new());

        assert_eq!(ids(&found), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn empty_text_is_vacuous() {
        let catalog = Catalog::builtin();
        let found = filter(&catalog, &RecipeQuery::new().text(""), &Favorites::new());

        assert_eq!(found.len(), catalog.len());
    }

    #[test]
    fn text_matches_title_or_ingredient() {
        let catalog = Catalog::builtin();

        let found = filter(&catalog, &RecipeQuery::new().text("BANANA"), &Favorites::new());
        assert_eq!(ids(&found), vec!["2", "4"]);

        let found = filter(&catalog, &RecipeQuery::new().text("muffin"), &Favorites::new());
        assert_eq!(ids(&found), vec!["4"]);
    }

    #[test]
    fn favorites_only_uses_given_set() {
        let catalog = Catalog::builtin();
        let favorites: Favorites = ["5", "2", "missing"].into_iter().collect();

        let found = filter(&catalog, &RecipeQuery::new().favorites_only(true), &favorites);
        assert_eq!(ids(&found), vec!["2", "5"]);

        let found = filter(&catalog, &RecipeQuery::new().favorites_only(false), &favorites);
        assert_eq!(found.len(), 6);
    }

    #[test]
    fn allergen_scans_description_too() {
        let catalog = Catalog::builtin();

        // Recipe 1 only mentions milk in its description.
        let found = filter(&catalog, &RecipeQuery::new().exclude("milk"), &Favorites::new());
        assert!(!ids(&found).contains(&"1"));

        let found = filter(&catalog, &RecipeQuery::new().exclude("egg"), &Favorites::new());
        assert!(!ids(&found).contains(&"4"));
    }
}
