//! Tests for configuration system

use littlespoon::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.to_string_lossy().into_owned()))?;

    assert_eq!(config.baby.name, "Leo");
    assert_eq!(config.baby.months_old, 7);
    assert_eq!(config.week.timezone, "UTC");
    assert!(config.week.anchor.is_none());
    assert!(config.plan.sample);
    assert!(config.plan.favorites.is_empty());
    assert!(config.recipes.is_empty());
    assert!(!config.observability.json);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_loads_from_toml() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("planner.toml");
    std::fs::write(
        &path,
        r#"
[baby]
name = "Mia"
months_old = 10

[week]
timezone = "Europe/Paris"
anchor = "2026-10-21"

[plan]
sample = false
favorites = ["2", "5"]

[[recipes]]
title = "Pear & Oat Porridge"
short_description = "Warm and naturally sweet."
age_groups = ["6-8", "8-10 months"]
meal_type = "Breakfast"
ingredients = [
  { name = "Pear", amount = "1/2", category = "Produce" },
  { name = "Oats", amount = "3 tbsp", category = "Pantry" },
]
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.baby.name, "Mia");
    assert_eq!(config.baby.months_old, 10);
    assert_eq!(config.week.anchor.as_deref(), Some("2026-10-21"));
    assert!(!config.plan.sample);
    assert_eq!(config.plan.favorites, vec!["2", "5"]);
    assert_eq!(config.recipes.len(), 1);
    assert_eq!(config.recipes[0].age_groups.len(), 2);
    assert_eq!(config.observability.log_level, "warn");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_validation_rejects_bad_values() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("bad.toml");
    std::fs::write(
        &path,
        r#"
[baby]
months_old = -2

[observability]
log_level = "littlespoon=loud"
"#,
    )?;

    let mut config = Config::load(Some(path.to_string_lossy().into_owned()))?;
    let err = config.validate().unwrap_err();
    assert!(err.contains("months_old"), "{err}");

    config.baby.months_old = 4;
    let err = config.validate().unwrap_err();
    assert!(err.contains("loud"), "{err}");

    Ok(())
}
