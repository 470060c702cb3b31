use std::collections::BTreeMap;

use littlespoon_mealplan::WeeklyPlan;
use littlespoon_shared::{Ingredient, IngredientCategory, MealType};
use serde::Serialize;
use time::Date;

/// One ingredient line and the planned meal it comes from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingItem {
    pub ingredient: Ingredient,
    pub recipe_id: String,
    pub recipe_title: String,
    pub date: Date,
    pub meal_type: MealType,
}

/// Ingredients of every assigned meal, grouped by category.
///
/// Entries are never merged: the same ingredient used by two meals shows up
/// twice. Categories without entries are left out of the map.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ShoppingList {
    categories: BTreeMap<IngredientCategory, Vec<ShoppingItem>>,
}

impl ShoppingList {
    pub fn items(&self, category: IngredientCategory) -> &[ShoppingItem] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty categories in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (IngredientCategory, &[ShoppingItem])> {
        self.categories
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = IngredientCategory> + '_ {
        self.categories.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Walks the week day by day, meals in declared order, and lists every
/// ingredient of each assigned recipe in the recipe's own order.
pub fn aggregate(plan: &WeeklyPlan) -> ShoppingList {
    let mut list = ShoppingList::default();

    for day in plan {
        for (meal_type, slot) in day.meals.iter() {
            let Some(recipe) = &slot.recipe else {
                continue;
            };

            for ingredient in &recipe.ingredients {
                list.categories
                    .entry(ingredient.category)
                    .or_default()
                    .push(ShoppingItem {
                        ingredient: ingredient.clone(),
                        recipe_id: recipe.id.to_owned(),
                        recipe_title: recipe.title.to_owned(),
                        date: day.date,
                        meal_type,
                    });
            }
        }
    }

    tracing::debug!(
        week = %plan.start(),
        items = list.len(),
        categories = list.categories.len(),
        "shopping list aggregated"
    );

    list
}
