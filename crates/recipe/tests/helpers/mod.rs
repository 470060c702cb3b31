use littlespoon_recipe::Recipe;
use littlespoon_shared::{AgeBand, Ingredient, IngredientCategory, MealType};

pub fn avocado_banana_smash() -> Recipe {
    Recipe {
        id: "R1".to_owned(),
        title: "Avocado & Banana Smash".to_owned(),
        short_description: "Creamy healthy fats.".to_owned(),
        full_description: "No cooking required.".to_owned(),
        image_ref: "img/r1.jpg".to_owned(),
        age_groups: [AgeBand::FourToSix, AgeBand::SixToEight, AgeBand::EightToTen].into(),
        meal_type: MealType::Lunch,
        ingredients: vec![
            Ingredient::new("Avocado", "1/2 ripe", IngredientCategory::Produce),
            Ingredient::new("Banana", "1/2 ripe", IngredientCategory::Produce),
        ],
        prep_time: "5 mins".to_owned(),
        nutrition_highlight: None,
    }
}

pub fn recipe(
    id: &str,
    title: &str,
    meal_type: MealType,
    description: &str,
    ingredients: &[&str],
) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: title.to_owned(),
        short_description: String::new(),
        full_description: description.to_owned(),
        image_ref: String::new(),
        age_groups: [AgeBand::TwelveToEighteen].into(),
        meal_type,
        ingredients: ingredients
            .iter()
            .map(|name| Ingredient::new(*name, "1", IngredientCategory::Other))
            .collect(),
        prep_time: "10 mins".to_owned(),
        nutrition_highlight: None,
    }
}
