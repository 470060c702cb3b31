use littlespoon_shared::AgeBand;

use crate::{DevelopmentStage, GuideCategory, IngredientGuide, Milestone};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn stage(
    band: AgeBand,
    title: &str,
    foods_to_try: &[&str],
    foods_to_avoid: &[&str],
    skills: &[&str],
    tips: &str,
) -> DevelopmentStage {
    DevelopmentStage {
        band,
        title: title.to_owned(),
        foods_to_try: strings(foods_to_try),
        foods_to_avoid: strings(foods_to_avoid),
        skills: strings(skills),
        tips: tips.to_owned(),
    }
}

pub(crate) fn stages() -> Vec<DevelopmentStage> {
    vec![
        stage(
            AgeBand::FourToSix,
            "Exploration Phase",
            &[
                "Single-ingredient purees",
                "Iron-fortified cereals",
                "Soft mashed sweet potato",
                "Avocado mash",
            ],
            &[
                "Honey (botulism risk)",
                "Added salt",
                "Added sugar",
                "Whole nuts (choking)",
                "Cow milk as drink",
            ],
            &[
                "Holding head up steady",
                "Lost tongue-thrust reflex",
                "Opening mouth for spoon",
                "Moving food to back of mouth",
            ],
            "Start with just one meal a day. The goal is exploring flavors and textures, not calories. Milk is still the main source of nutrition.",
        ),
        stage(
            AgeBand::SixToEight,
            "Textural Adventures",
            &[
                "Lumpy mashes",
                "Soft finger foods (banana)",
                "Ground meat",
                "Well-cooked pasta",
                "Yogurt",
            ],
            &["Honey", "Whole grapes (choking)", "Raw veggies", "Large chunks of meat"],
            &[
                "Sitting up without support",
                "Raking food with palm",
                "Closing lips around spoon",
                "Chewing motions",
            ],
            "Offer variety! Introduce allergens one at a time. Let them get messy, it is part of the learning process.",
        ),
        stage(
            AgeBand::EightToTen,
            "Pincer Master",
            &[
                "Blueberries (squashed)",
                "Peas (flattened)",
                "Small cheese cubes",
                "Scrambled eggs",
                "Beans",
            ],
            &["Honey", "Hard candies", "Popcorn", "Whole nuts"],
            &[
                "Pincer grasp (thumb & forefinger)",
                "Biting off pieces",
                "Self-feeding with hands",
                "Drinking from open cup",
            ],
            "Encourage self-feeding. Meals are becoming more structured: Breakfast, Lunch, and Dinner.",
        ),
        stage(
            AgeBand::TenToTwelve,
            "Almost a Toddler",
            &[
                "Family meals (low salt)",
                "Toast strips",
                "Chopped fruits",
                "Soft meats",
                "Rice",
            ],
            &["Honey", "Choking hazards"],
            &[
                "Using a spoon (messily)",
                "Improved chewing",
                "Drinking from straw",
                "Pointing at desired food",
            ],
            "Three meals a day plus snacks. They might start eating less milk as food intake increases.",
        ),
    ]
}

fn milestone(month: u32, title: &str, description: &str) -> Milestone {
    Milestone {
        month,
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

pub(crate) fn milestones() -> Vec<Milestone> {
    vec![
        milestone(4, "First Tastes", "Interest in food, holding head up high."),
        milestone(6, "Solid Starts", "Sitting up, mashing food with tongue."),
        milestone(
            8,
            "Pincer Grasp",
            "Picking up small objects with thumb and forefinger.",
        ),
        milestone(10, "Chewing Skills", "Moving food from side to side."),
        milestone(12, "Family Table", "Eating mostly the same food as family."),
    ]
}

fn guide(
    id: &str,
    name: &str,
    category: GuideCategory,
    preparation: &[(AgeBand, &str)],
    choking_hazards: &str,
    nutrition: &str,
) -> IngredientGuide {
    IngredientGuide {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
        image_ref: format!("img/ingredients/{id}.jpg"),
        preparation: preparation
            .iter()
            .map(|(band, advice)| (*band, (*advice).to_owned()))
            .collect(),
        choking_hazards: choking_hazards.to_owned(),
        nutrition: nutrition.to_owned(),
    }
}

pub(crate) fn ingredients() -> Vec<IngredientGuide> {
    use AgeBand::*;

    vec![
        guide(
            "banana",
            "Banana",
            GuideCategory::Produce,
            &[
                (FourToSix, "Mash smoothly with breast milk or formula."),
                (SixToEight, "Cut into long spears (finger length) for gripping. Or mash with lumps."),
                (EightToTen, "Break into smaller chunks or serve spears."),
                (TenToTwelve, "Slices or small chunks."),
            ],
            "Generally safe, but avoid large hard chunks if underripe. Stickiness can cause gagging.",
            "Potassium, Vitamin B6, Vitamin C.",
        ),
        guide(
            "avocado",
            "Avocado",
            GuideCategory::Produce,
            &[
                (FourToSix, "Mash into a smooth guacamole texture."),
                (SixToEight, "Large spears rolled in hemp seeds or crushed cereal for grip."),
                (EightToTen, "Small cubes."),
                (TenToTwelve, "Cubes or slices on toast."),
            ],
            "Very safe when ripe and soft.",
            "Healthy fats, Fiber, Folate.",
        ),
        guide(
            "egg",
            "Egg",
            GuideCategory::Protein,
            &[
                (FourToSix, "Hard boiled yolk mashed with milk."),
                (SixToEight, "Omelette strips (two fingers wide). Scrambled well cooked."),
                (EightToTen, "Scrambled pieces or chopped hard boiled egg."),
            ],
            "No major hazard if cooked soft. Common allergen.",
            "Choline, Protein, Iron.",
        ),
        guide(
            "broccoli",
            "Broccoli",
            GuideCategory::Produce,
            &[
                (SixToEight, "Large florets steamed until very soft. Baby holds the stem."),
                (EightToTen, "Chopped florets."),
                (TenToTwelve, "Small pieces."),
            ],
            "Raw stems are hard. Steam until you can squash it between fingers.",
            "Iron, Calcium, Vitamin C.",
        ),
        guide(
            "blueberries",
            "Blueberries",
            GuideCategory::Produce,
            &[
                (SixToEight, "Stewed until skins burst and mashed."),
                (EightToTen, "Raw but FLATTENED between fingers."),
                (TenToTwelve, "Flattened or halved."),
                (TwelveToEighteen, "Whole if confident chewer, otherwise halved."),
            ],
            "High risk if served whole and round. ALWAYS flatten or halve.",
            "Antioxidants, Fiber.",
        ),
        guide(
            "salmon",
            "Salmon",
            GuideCategory::Protein,
            &[
                (SixToEight, "Cooked thoroughly and flaked. Remove all bones."),
                (EightToTen, "Flaked pieces or formed into soft patties."),
            ],
            "Bones are the main hazard. Check carefully.",
            "Omega-3 (DHA), Protein.",
        ),
        guide(
            "yogurt",
            "Yogurt",
            GuideCategory::Dairy,
            &[
                (FourToSix, "Plain whole milk yogurt on a spoon."),
                (SixToEight, "Self-feeding with pre-loaded spoon."),
            ],
            "None. Common allergen (dairy).",
            "Calcium, Probiotics, Fat.",
        ),
        guide(
            "oats",
            "Oats",
            GuideCategory::Grain,
            &[
                (FourToSix, "Iron-fortified oat flour porridge."),
                (SixToEight, "Thicker porridge or oat fingers (baked)."),
            ],
            "None if cooked. Dry oats can cause coughing.",
            "Iron, Fiber, Zinc.",
        ),
        guide(
            "apple",
            "Apple",
            GuideCategory::Produce,
            &[
                (FourToSix, "Cooked, peeled, and pureed smooth."),
                (SixToEight, "Cooked until soft wedges or grated raw."),
                (EightToTen, "Cooked pieces or very thin raw slices."),
            ],
            "Raw apple is a top choking hazard. Cook until soft or grate.",
            "Fiber, Vitamin C.",
        ),
        guide(
            "carrot",
            "Carrot",
            GuideCategory::Produce,
            &[
                (FourToSix, "Steamed until very soft and pureed."),
                (SixToEight, "Whole peeled carrot steamed soft (baby holds like handle)."),
                (EightToTen, "Cooked and diced into small cubes."),
            ],
            "Raw carrots are very hard. Always cook until soft or grate finely.",
            "Vitamin A (Beta-carotene), Fiber.",
        ),
        guide(
            "chicken",
            "Chicken",
            GuideCategory::Protein,
            &[
                (SixToEight, "Drumstick (bone-in, skin removed) for gnawing or ground chicken."),
                (EightToTen, "Shredded chicken or small soft pieces."),
                (TenToTwelve, "Diced pieces."),
            ],
            "Large chunks of dry meat. Serve with sauce or broth.",
            "Protein, Iron, Zinc.",
        ),
        guide(
            "beef",
            "Beef",
            GuideCategory::Protein,
            &[
                (SixToEight, "Large strip of steak for sucking juices (remove before bite). Ground beef."),
                (EightToTen, "Meatballs or soft shredded beef."),
            ],
            "Tough, chewy pieces. Cook slow and low for tenderness.",
            "Iron (Heme), Protein, Zinc.",
        ),
        guide(
            "lentils",
            "Lentils",
            GuideCategory::Protein,
            &[
                (SixToEight, "Mashed lentils or lentil cakes."),
                (EightToTen, "Whole cooked lentils (flattened if large)."),
            ],
            "Low risk if cooked soft.",
            "Iron, Fiber, Plant Protein.",
        ),
        guide(
            "pasta",
            "Pasta",
            GuideCategory::Grain,
            &[
                (SixToEight, "Large pasta shapes (penne, fusilli) cooked very soft."),
                (EightToTen, "Smaller pasta shapes or cut pieces."),
            ],
            "Low risk. Overcook slightly for safety.",
            "Carbohydrates, Energy.",
        ),
        guide(
            "cheese",
            "Cheese",
            GuideCategory::Dairy,
            &[
                (SixToEight, "Grated cheese or melted onto toast."),
                (EightToTen, "Thin slices or small cubes."),
            ],
            "Cubes can be risky if too large or hard. Avoid string cheese in round shape.",
            "Calcium, Fat, Protein.",
        ),
        guide(
            "peanutbutter",
            "Peanut Butter",
            GuideCategory::Pantry,
            &[
                (FourToSix, "Thinned with water/milk and mixed into oatmeal."),
                (SixToEight, "Spread VERY thinly on toast strips."),
            ],
            "Globs of nut butter are a high choking risk. Thin it out.",
            "Healthy Fats, Protein, Allergen exposure.",
        ),
        guide(
            "strawberry",
            "Strawberry",
            GuideCategory::Produce,
            &[
                (SixToEight, "Large whole berry (very ripe/soft)."),
                (EightToTen, "Chopped into small pieces."),
            ],
            "Small, firm berries. Ensure they are soft.",
            "Vitamin C, Antioxidants.",
        ),
        guide(
            "mango",
            "Mango",
            GuideCategory::Produce,
            &[
                (SixToEight, "Mango pit with most flesh removed (for gnawing/grip)."),
                (EightToTen, "Small slippery pieces (roll in coconut/hemp seeds for grip)."),
            ],
            "Very slippery. Rolling in crumbs helps grip.",
            "Vitamin A, Vitamin C.",
        ),
        guide(
            "watermelon",
            "Watermelon",
            GuideCategory::Produce,
            &[
                (SixToEight, "Large rectangular slice with rind removed."),
                (EightToTen, "Small dices."),
            ],
            "Seeds. Remove all seeds.",
            "Hydration, Lycopene.",
        ),
        guide(
            "tomato",
            "Tomato",
            GuideCategory::Produce,
            &[
                (SixToEight, "Large wedge of beefsteak tomato (skin removed)."),
                (EightToTen, "Quartered cherry tomatoes (NEVER WHOLE)."),
            ],
            "Cherry tomatoes are a major hazard. Always quarter lengthwise.",
            "Vitamin C, Lycopene.",
        ),
        guide(
            "cucumber",
            "Cucumber",
            GuideCategory::Produce,
            &[
                (SixToEight, "Long thick spear, skin removed. Cool for teething."),
                (EightToTen, "Thin half-moons or diced."),
            ],
            "Raw rounds are hard and dangerous. Cut lengthwise.",
            "Hydration, Vitamin K.",
        ),
        guide(
            "spinach",
            "Spinach",
            GuideCategory::Produce,
            &[
                (SixToEight, "Finely chopped and cooked into omelets or mashes."),
                (EightToTen, "Cooked whole leaves mixed in sauce."),
            ],
            "Raw leaves can stick to palate. Cook down.",
            "Iron, Calcium, Folate.",
        ),
        guide(
            "bread",
            "Bread/Toast",
            GuideCategory::Grain,
            &[
                (SixToEight, "Toast strips (2 fingers wide). Avoid soft gummy bread."),
                (EightToTen, "Small squares of toast with topping."),
            ],
            "Untoasted soft bread can ball up in mouth. Lightly toast.",
            "Carbohydrates, B Vitamins.",
        ),
        guide(
            "rice",
            "Rice",
            GuideCategory::Grain,
            &[
                (SixToEight, "Mashed with sauce into balls."),
                (EightToTen, "Loose rice (good pincer practice)."),
            ],
            "Low risk. Serve moist.",
            "Energy, Carbohydrates.",
        ),
        guide(
            "beans",
            "Black Beans",
            GuideCategory::Protein,
            &[
                (SixToEight, "Mashed into a paste."),
                (EightToTen, "Whole beans gently flattened."),
            ],
            "Whole round beans. Flatten them.",
            "Iron, Fiber, Protein.",
        ),
        guide(
            "tofu",
            "Tofu",
            GuideCategory::Protein,
            &[
                (SixToEight, "Large strips of firm tofu."),
                (EightToTen, "Small cubes."),
            ],
            "Low risk. Soft texture.",
            "Calcium, Protein, Iron.",
        ),
        guide(
            "peach",
            "Peach",
            GuideCategory::Produce,
            &[
                (SixToEight, "Very ripe half (skin off) or stewed slices."),
                (EightToTen, "Small ripe pieces."),
            ],
            "Hard underripe fruit. Ensure softness.",
            "Vitamin C, Vitamin A.",
        ),
        guide(
            "bellpepper",
            "Bell Pepper",
            GuideCategory::Produce,
            &[
                (SixToEight, "Roasted/steamed strips (skin removed)."),
                (EightToTen, "Small cooked pieces."),
            ],
            "Raw pieces. Cook until soft.",
            "Vitamin C (very high).",
        ),
    ]
}
