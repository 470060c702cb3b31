use littlespoon_mealplan::{AppState, BabyProfile, FixedClock, Store};
use littlespoon_recipe::{Catalog, Recipe};
use littlespoon_shared::{AgeBand, Ingredient, IngredientCategory, MealType};
use time::{Date, macros::date};

pub const MONDAY: Date = date!(2026 - 10 - 19);

pub fn recipe(id: &str, title: &str, ingredients: &[(&str, IngredientCategory)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: title.to_owned(),
        short_description: String::new(),
        full_description: String::new(),
        image_ref: String::new(),
        age_groups: [AgeBand::SixToEight].into(),
        meal_type: MealType::Lunch,
        ingredients: ingredients
            .iter()
            .map(|(name, category)| Ingredient::new(*name, "1", *category))
            .collect(),
        prep_time: "10 mins".to_owned(),
        nutrition_highlight: None,
    }
}

pub fn state_with(catalog: Catalog) -> anyhow::Result<AppState> {
    let baby = BabyProfile::new("Leo", 7)?;

    Ok(AppState::new(baby, catalog, &FixedClock(date!(2026 - 10 - 21))))
}

pub fn store() -> anyhow::Result<Store> {
    Ok(Store::new(state_with(Catalog::builtin())?))
}
