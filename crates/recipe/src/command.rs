use std::sync::Arc;

use littlespoon_shared::{AgeBand, Ingredient, MealType};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{Catalog, Recipe};

pub const DEFAULT_IMAGE_REF: &str =
    "https://images.unsplash.com/photo-1498837167922-ddd27525d352?auto=format&fit=crop&q=80&w=400";
pub const DEFAULT_PREP_TIME: &str = "15 mins";

/// User-submitted recipe, before it gets an id and defaults.
#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct NewRecipe {
    #[validate(length(min = 1, max = 120), custom(function = "not_blank"))]
    pub title: String,
    #[validate(length(max = 280))]
    pub short_description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[validate(length(min = 1))]
    pub age_groups: Vec<AgeBand>,
    pub meal_type: MealType,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub nutrition_highlight: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl NewRecipe {
    /// Turns the input into a catalog recipe with the given id.
    ///
    /// Blank optional fields fall back to defaults: the full description to
    /// the short one, the image and prep time to fixed placeholders.
    /// Ingredients with an empty name are dropped.
    pub fn into_recipe(self, id: impl Into<String>) -> littlespoon_shared::Result<Recipe> {
        self.validate()?;

        let full_description =
            filled(self.full_description).unwrap_or_else(|| self.short_description.clone());

        Ok(Recipe {
            id: id.into(),
            title: self.title.trim().to_owned(),
            short_description: self.short_description,
            full_description,
            image_ref: filled(self.image_ref).unwrap_or_else(|| DEFAULT_IMAGE_REF.to_owned()),
            age_groups: self.age_groups.into_iter().collect(),
            meal_type: self.meal_type,
            ingredients: self
                .ingredients
                .into_iter()
                .filter(|i| !i.name.trim().is_empty())
                .collect(),
            prep_time: filled(self.prep_time).unwrap_or_else(|| DEFAULT_PREP_TIME.to_owned()),
            nutrition_highlight: filled(self.nutrition_highlight),
        })
    }
}

impl Catalog {
    /// Validates `input`, assigns it a fresh id and appends it.
    pub fn create(&mut self, input: NewRecipe) -> littlespoon_shared::Result<Arc<Recipe>> {
        let recipe = input.into_recipe(self.next_id())?;
        self.push(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use littlespoon_shared::{Error, IngredientCategory};

    fn input() -> NewRecipe {
        NewRecipe {
            title: "Lentil Fingers".to_owned(),
            short_description: "Soft baked lentil sticks.".to_owned(),
            age_groups: vec![AgeBand::EightToTen],
            meal_type: MealType::Lunch,
            ingredients: vec![
                Ingredient::new("Red Lentils", "1/2 cup", IngredientCategory::Protein),
                Ingredient::new("  ", "", IngredientCategory::Produce),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_filled() {
        let recipe = input().into_recipe("x").unwrap();

        assert_eq!(recipe.full_description, "Soft baked lentil sticks.");
        assert_eq!(recipe.image_ref, DEFAULT_IMAGE_REF);
        assert_eq!(recipe.prep_time, DEFAULT_PREP_TIME);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.nutrition_highlight, None);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut input = input();
        input.title = "   ".to_owned();

        assert!(matches!(input.into_recipe("x"), Err(Error::Validate(_))));
    }

    #[test]
    fn age_group_is_required() {
        let mut input = input();
        input.age_groups.clear();

        assert!(matches!(input.into_recipe("x"), Err(Error::Validate(_))));
    }

    #[test]
    fn create_assigns_unique_id() {
        let mut catalog = Catalog::builtin();
        let first = catalog.create(input()).unwrap();
        let second = catalog.create(input()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(catalog.len(), 8);
    }
}
