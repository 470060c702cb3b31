use littlespoon_shared::MealType;

use crate::{AppState, Command};

/// Demo assignments for a first run: the first catalog recipe at Monday
/// lunch and the fifth at Tuesday dinner. Missing recipes or days are skipped.
pub fn sample_plan(state: &AppState) -> Vec<Command> {
    let placements = [(0, 0, MealType::Lunch), (1, 4, MealType::Dinner)];

    placements
        .into_iter()
        .filter_map(|(day, recipe, meal_type)| {
            let date = state.weekly_plan().days().get(day)?.date;
            let recipe = state.catalog().as_slice().get(recipe)?.clone();

            Some(Command::assign_recipe(date, meal_type, recipe))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BabyProfile, FixedClock};
    use littlespoon_recipe::Catalog;
    use time::macros::date;

    #[test]
    fn sample_plan_targets_monday_lunch_and_tuesday_dinner() {
        let baby = BabyProfile::new("Leo", 7).unwrap();
        let state = AppState::new(baby, Catalog::builtin(), &FixedClock(date!(2026 - 10 - 21)));

        let commands = sample_plan(&state);
        assert_eq!(commands.len(), 2);

        let mut state = state;
        for command in commands {
            state = state.apply(command).unwrap();
        }

        let lunch = state.slot(date!(2026 - 10 - 19), MealType::Lunch).unwrap();
        let dinner = state.slot(date!(2026 - 10 - 20), MealType::Dinner).unwrap();
        assert_eq!(lunch.recipe.as_ref().map(|r| r.id.as_str()), Some("1"));
        assert_eq!(dinner.recipe.as_ref().map(|r| r.id.as_str()), Some("5"));
    }

    #[test]
    fn sample_plan_skips_missing_recipes() {
        let baby = BabyProfile::new("Leo", 7).unwrap();
        let state = AppState::new(baby, Catalog::new(), &FixedClock(date!(2026 - 10 - 21)));

        assert!(sample_plan(&state).is_empty());
    }
}
