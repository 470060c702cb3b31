use littlespoon_shared::{AgeBand, Ingredient, IngredientCategory, MealType};

use crate::Recipe;

fn ingredient(name: &str, amount: &str, category: IngredientCategory) -> Ingredient {
    Ingredient::new(name, amount, category)
}

pub(crate) fn recipes() -> Vec<Recipe> {
    use AgeBand::*;
    use IngredientCategory::*;

    vec![
        Recipe {
            id: "1".to_owned(),
            title: "Velvety Sweet Potato Mash".to_owned(),
            short_description: "A gentle introduction to solids with natural sweetness.".to_owned(),
            full_description: "This smooth puree is perfect for first tastes. Sweet potatoes are packed with Vitamin A and fiber. We roast them to bring out the natural caramel flavors before mashing with a touch of breast milk or formula for familiarity.".to_owned(),
            image_ref: "https://picsum.photos/400/300?random=1".to_owned(),
            age_groups: [FourToSix, SixToEight].into(),
            meal_type: MealType::Lunch,
            ingredients: vec![
                ingredient("Sweet Potato", "1 medium", Produce),
                ingredient("Olive Oil", "1 tsp", Pantry),
                ingredient("Cinnamon", "pinch", Pantry),
            ],
            prep_time: "25 mins".to_owned(),
            nutrition_highlight: Some("Rich in Beta-Carotene".to_owned()),
        },
        Recipe {
            id: "2".to_owned(),
            title: "Avocado & Banana Smash".to_owned(),
            short_description: "Creamy healthy fats perfect for brain development.".to_owned(),
            full_description: "No cooking required! This nutrient-dense combination offers healthy monounsaturated fats from avocado and potassium from bananas. Its creamy texture is widely accepted by babies just starting out.".to_owned(),
            image_ref: "https://picsum.photos/400/300?random=2".to_owned(),
            age_groups: [FourToSix, SixToEight, EightToTen].into(),
            meal_type: MealType::Breakfast,
            ingredients: vec![
                ingredient("Avocado", "1/2 ripe", Produce),
                ingredient("Banana", "1/2 ripe", Produce),
            ],
            prep_time: "5 mins".to_owned(),
            nutrition_highlight: Some("Healthy Fats for Brain".to_owned()),
        },
        Recipe {
            id: "3".to_owned(),
            title: "Soft Broccoli Florets".to_owned(),
            short_description: "Great for practicing grasping and exploring textures.".to_owned(),
            full_description: "Steamed broccoli florets are an excellent finger food for babies developing their palmar grasp. The \"handle\" makes it easy to hold while they gnaw on the soft florets.".to_owned(),
            image_ref: "https://picsum.photos/400/300?random=3".to_owned(),
            age_groups: [SixToEight, EightToTen].into(),
            meal_type: MealType::Dinner,
            ingredients: vec![ingredient("Broccoli", "1 head", Produce)],
            prep_time: "10 mins".to_owned(),
            nutrition_highlight: Some("Iron & Vitamin C".to_owned()),
        },
        Recipe {
            id: "4".to_owned(),
            title: "Blueberry Oat Muffins".to_owned(),
            short_description: "Sugar-free muffins perfect for baby led weaning.".to_owned(),
            full_description: "These soft, moist muffins are sweetened only with fruit. They are easy to hold and break apart in the mouth, making them safe for established eaters. Great for freezing in batches.".to_owned(),
            image_ref: "https://picsum.photos/400/300?random=4".to_owned(),
            age_groups: [EightToTen, TenToTwelve, TwelveToEighteen].into(),
            meal_type: MealType::Snack,
            ingredients: vec![
                ingredient("Oats", "1 cup", Pantry),
                ingredient("Blueberries", "1/2 cup", Produce),
                ingredient("Banana", "1 mashed", Produce),
                ingredient("Egg", "1", Protein),
            ],
            prep_time: "30 mins".to_owned(),
            nutrition_highlight: Some("Fiber & Antioxidants".to_owned()),
        },
        Recipe {
            id: "5".to_owned(),
            title: "Salmon & Pea Fishcakes".to_owned(),
            short_description: "Omega-3 rich soft cakes for dinner.".to_owned(),
            full_description: "Flaky salmon mixed with mashed potato and sweet peas. These patties are pan-fried gently to create a soft interior with a slightly firm exterior that is easy for little hands to hold.".to_owned(),
            image_ref: "https://picsum.photos/400/300?random=5".to_owned(),
            age_groups: [TenToTwelve, TwelveToEighteen, EighteenToTwentyFour].into(),
            meal_type: MealType::Dinner,
            ingredients: vec![
                ingredient("Salmon Fillet", "1", Protein),
                ingredient("Potato", "1 large", Produce),
                ingredient("Peas", "1/2 cup", Produce),
            ],
            prep_time: "40 mins".to_owned(),
            nutrition_highlight: Some("Omega-3 Fatty Acids".to_owned()),
        },
        Recipe {
            id: "6".to_owned(),
            title: "Yogurt & Berry Swirl".to_owned(),
            short_description: "Probiotics and vitamins in a colorful bowl.".to_owned(),
            full_description: "Full-fat Greek yogurt swirled with a homemade berry coulis (just stewed fruit). Excellent for practicing with a spoon.".to_owned(),
            image_ref: "https://picsum.photos/400/300?random=6".to_owned(),
            age_groups: [SixToEight, EightToTen, TwentyFourPlus].into(),
            meal_type: MealType::Breakfast,
            ingredients: vec![
                ingredient("Greek Yogurt", "1/2 cup", Dairy),
                ingredient("Strawberries", "3", Produce),
            ],
            prep_time: "5 mins".to_owned(),
            nutrition_highlight: Some("Calcium & Probiotics".to_owned()),
        },
    ]
}
