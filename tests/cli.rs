use littlespoon::{
    Config,
    cli::{RecipesArgs, guidance, ingredient, plan, recipes, shopping},
};
use littlespoon_guidance::Guidebook;
use littlespoon_shared::{AgeBand, MealType};

mod helpers;

#[test]
fn sample_plan_is_applied_on_startup() -> anyhow::Result<()> {
    let session = helpers::session(&Config::default())?;

    let output = helpers::render(|out| plan(&session, false, out))?;

    assert!(output.starts_with("Week of 2026-10-19 for Leo (7 months)"));
    assert!(output.contains("Wednesday 2026-10-21 (today)"));
    assert!(output.contains("12:00 Lunch     Velvety Sweet Potato Mash"));
    assert!(output.contains("17:30 Dinner    Salmon & Pea Fishcakes"));

    Ok(())
}

#[test]
fn empty_plan_has_empty_shopping_list() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.plan.sample = false;
    let session = helpers::session(&config)?;

    let output = helpers::render(|out| shopping(&session, false, out))?;
    assert_eq!(output, "Nothing planned this week, the shopping list is empty.\n");

    let json = helpers::render(|out| shopping(&session, true, out))?;
    assert_eq!(json.trim(), "{}");

    Ok(())
}

#[test]
fn shopping_list_groups_sample_meals() -> anyhow::Result<()> {
    let session = helpers::session(&Config::default())?;

    let output = helpers::render(|out| shopping(&session, false, out))?;

    assert!(output.starts_with("Produce\n"));
    assert!(output.contains("for Velvety Sweet Potato Mash, Monday Lunch"));
    assert!(output.contains("for Salmon & Pea Fishcakes, Tuesday Dinner"));

    Ok(())
}

#[test]
fn recipes_filter_from_args() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.plan.favorites = vec!["5".to_string()];
    let session = helpers::session(&config)?;

    let args = RecipesArgs {
        meal_type: Some(MealType::Dinner),
        ..RecipesArgs::default()
    };
    let output = helpers::render(|out| recipes(&session, args, false, out))?;
    assert_eq!(output.lines().count(), 2);
    assert!(output.contains("* Salmon & Pea Fishcakes"));

    let args = RecipesArgs {
        favorites: true,
        age: Some(AgeBand::FourToSix),
        ..RecipesArgs::default()
    };
    let output = helpers::render(|out| recipes(&session, args, false, out))?;
    assert_eq!(output, "No recipes found.\n");

    Ok(())
}

#[test]
fn configured_recipes_join_the_catalog() -> anyhow::Result<()> {
    let config: Config = serde_json::from_value(serde_json::json!({
        "recipes": [{
            "title": "Pear & Oat Porridge",
            "short_description": "Warm and naturally sweet.",
            "age_groups": ["6-8"],
            "meal_type": "Breakfast",
            "ingredients": [{ "name": "Pear", "amount": "1/2", "category": "Produce" }]
        }]
    }))?;
    let session = helpers::session(&config)?;

    assert_eq!(session.state().catalog().len(), 7);

    let args = RecipesArgs {
        search: Some("pear".to_string()),
        ..RecipesArgs::default()
    };
    let json = helpers::render(|out| recipes(&session, args, true, out))?;
    let found: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(found[0]["title"], "Pear & Oat Porridge");
    assert_eq!(found[0]["prep_time"], "15 mins");

    Ok(())
}

#[test]
fn guidance_truncates_older_ages() -> anyhow::Result<()> {
    let session = helpers::session(&Config::default())?;
    let book = Guidebook::builtin();

    let output = helpers::render(|out| guidance(&session, &book, None, false, out))?;
    assert!(output.starts_with("7 months (6-8 months)"));
    assert!(output.contains("Textural Adventures"));
    assert!(output.contains("Next milestone: Pincer Grasp at 8 months (87% there)"));

    let output = helpers::render(|out| guidance(&session, &book, Some(15), false, out))?;
    assert!(output.starts_with("15 months (12-18 months)"));
    assert!(output.contains("Almost a Toddler"));

    let err = helpers::render(|out| guidance(&session, &book, Some(-1), false, out)).unwrap_err();
    assert!(err.to_string().contains("non-negative"));

    Ok(())
}

#[test]
fn ingredient_advice_uses_baby_age() -> anyhow::Result<()> {
    let session = helpers::session(&Config::default())?;
    let book = Guidebook::builtin();

    let output = helpers::render(|out| ingredient(&session, &book, "avo", false, out))?;
    assert!(output.starts_with("Avocado (Produce)"));
    assert!(output.contains("At 7 months: Large spears"));

    let output = helpers::render(|out| ingredient(&session, &book, "kale", false, out))?;
    assert_eq!(output, "No ingredient guide matches `kale`.\n");

    Ok(())
}
