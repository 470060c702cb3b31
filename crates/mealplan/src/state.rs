use std::sync::Arc;

use littlespoon_recipe::{Catalog, Favorites, Recipe, RecipeQuery, filter};
use littlespoon_shared::{AgeBand, CalendarDay, MealType};
use serde::Serialize;

use crate::{Clock, DayPlan, MealSlot, WeeklyPlan, week_start};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BabyProfile {
    name: String,
    months_old: i32,
}

impl BabyProfile {
    pub fn new(name: impl Into<String>, months_old: i32) -> littlespoon_shared::Result<Self> {
        if months_old < 0 {
            littlespoon_shared::bail!("age must be a non-negative number of months, got {}", months_old);
        }

        Ok(Self {
            name: name.into(),
            months_old,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn months_old(&self) -> i32 {
        self.months_old
    }

    pub fn age_band(&self) -> AgeBand {
        AgeBand::resolve(self.months_old).unwrap_or(AgeBand::FIRST)
    }

    pub(crate) fn with_months_old(&self, months_old: i32) -> littlespoon_shared::Result<Self> {
        Self::new(self.name.to_owned(), months_old)
    }
}

/// Everything the planner knows: the baby, this week's plan, favorites and
/// the recipe catalog.
///
/// Values are never edited in place. `apply` returns a new state and leaves
/// `self` as it was, so a held snapshot never changes under its reader.
#[derive(Serialize, Clone, Debug)]
pub struct AppState {
    pub(crate) baby: BabyProfile,
    pub(crate) weekly_plan: WeeklyPlan,
    pub(crate) favorites: Favorites,
    pub(crate) catalog: Catalog,
}

impl AppState {
    /// Anchors the plan on the Monday of `clock`'s current week. The week is
    /// not re-derived afterwards, see `Command::ReanchorWeek`.
    pub fn new(baby: BabyProfile, catalog: Catalog, clock: &impl Clock) -> Self {
        let monday = week_start(clock.today());

        tracing::debug!(%monday, recipes = catalog.len(), "planner state initialized");

        Self {
            baby,
            weekly_plan: WeeklyPlan::starting(monday),
            favorites: Favorites::new(),
            catalog,
        }
    }

    pub fn baby(&self) -> &BabyProfile {
        &self.baby
    }

    pub fn weekly_plan(&self) -> &WeeklyPlan {
        &self.weekly_plan
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn age_band(&self) -> AgeBand {
        self.baby.age_band()
    }

    pub fn day(&self, date: impl CalendarDay) -> Option<&DayPlan> {
        self.weekly_plan.day(date)
    }

    pub fn today(&self, clock: &impl Clock) -> Option<&DayPlan> {
        self.weekly_plan.day(clock.today())
    }

    pub fn slot(&self, date: impl CalendarDay, meal_type: MealType) -> Option<&MealSlot> {
        self.weekly_plan.slot(date, meal_type)
    }

    pub fn recipe(&self, id: &str) -> Option<&Arc<Recipe>> {
        self.catalog.get(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Catalog recipes matching `query`, checked against this state's favorites.
    pub fn search(&self, query: &RecipeQuery) -> Vec<Arc<Recipe>> {
        filter(&self.catalog, query, &self.favorites)
    }

    /// Favorited recipes still present in the catalog, in catalog order.
    pub fn favorite_recipes(&self) -> Vec<Arc<Recipe>> {
        self.search(&RecipeQuery::new().favorites_only(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use time::macros::date;

    fn state() -> AppState {
        let baby = BabyProfile::new("Leo", 7).unwrap();
        AppState::new(baby, Catalog::builtin(), &FixedClock(date!(2026 - 10 - 22)))
    }

    #[test]
    fn plan_anchors_on_monday() {
        let state = state();

        assert_eq!(state.weekly_plan().start(), date!(2026 - 10 - 19));
        assert!(state.weekly_plan().iter().all(|day| day.assigned_count() == 0));
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn today_uses_clock() {
        let state = state();

        let today = state.today(&FixedClock(date!(2026 - 10 - 25))).unwrap();
        assert_eq!(today.date, date!(2026 - 10 - 25));
        assert!(state.today(&FixedClock(date!(2026 - 10 - 26))).is_none());
    }

    #[test]
    fn baby_age_band() {
        let state = state();
        assert_eq!(state.age_band(), AgeBand::SixToEight);

        let err = BabyProfile::new("Leo", -2).unwrap_err();
        assert!(err.is_invalid_input());

        let toddler = BabyProfile::new("Mia", 30).unwrap();
        assert_eq!(toddler.age_band(), AgeBand::TwentyFourPlus);
    }

    #[test]
    fn recipe_lookup() {
        let state = state();

        assert_eq!(state.recipe("5").map(|r| r.meal_type), Some(MealType::Dinner));
        assert!(state.recipe("99").is_none());
    }

    #[test]
    fn favorite_recipes_skip_unknown_ids() {
        let mut state = state();
        state.favorites = ["6", "ghost", "2"].into_iter().collect();

        let ids = state
            .favorite_recipes()
            .iter()
            .map(|r| r.id.to_owned())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["2", "6"]);

        let found = state.search(&RecipeQuery::new().text("salmon"));
        assert_eq!(found.len(), 1);
    }
}
