use std::sync::Arc;

use littlespoon_recipe::{Favorites, Recipe};
use littlespoon_shared::{CalendarDay, MealType, Result};
use strum::AsRefStr;
use time::Date;

use crate::{AppState, MealSlot, SlotTime, WeeklyPlan, week_start};

/// State transition requests understood by [`AppState::apply`].
///
/// Slot commands address a day by civil date; a date outside the planned
/// week leaves the state unchanged rather than failing.
#[derive(AsRefStr, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AssignRecipe {
        date: Date,
        meal_type: MealType,
        recipe: Arc<Recipe>,
    },
    ClearSlot {
        date: Date,
        meal_type: MealType,
    },
    ToggleCompletion {
        date: Date,
        meal_type: MealType,
    },
    SetSlotTime {
        date: Date,
        meal_type: MealType,
        time: String,
    },
    ToggleFavorite {
        recipe_id: String,
    },
    AddRecipeToCatalog {
        recipe: Recipe,
    },
    SetBabyAge {
        months: i32,
    },
    ReanchorWeek {
        today: Date,
    },
}

impl Command {
    pub fn assign_recipe(date: impl CalendarDay, meal_type: MealType, recipe: Arc<Recipe>) -> Self {
        Self::AssignRecipe {
            date: date.calendar_day(),
            meal_type,
            recipe,
        }
    }

    pub fn clear_slot(date: impl CalendarDay, meal_type: MealType) -> Self {
        Self::ClearSlot {
            date: date.calendar_day(),
            meal_type,
        }
    }

    pub fn toggle_completion(date: impl CalendarDay, meal_type: MealType) -> Self {
        Self::ToggleCompletion {
            date: date.calendar_day(),
            meal_type,
        }
    }

    pub fn set_slot_time(date: impl CalendarDay, meal_type: MealType, time: impl Into<String>) -> Self {
        Self::SetSlotTime {
            date: date.calendar_day(),
            meal_type,
            time: time.into(),
        }
    }

    pub fn toggle_favorite(recipe_id: impl Into<String>) -> Self {
        Self::ToggleFavorite {
            recipe_id: recipe_id.into(),
        }
    }

    pub fn add_recipe(recipe: Recipe) -> Self {
        Self::AddRecipeToCatalog { recipe }
    }

    pub fn set_baby_age(months: i32) -> Self {
        Self::SetBabyAge { months }
    }

    pub fn reanchor_week(today: impl CalendarDay) -> Self {
        Self::ReanchorWeek {
            today: today.calendar_day(),
        }
    }
}

impl AppState {
    pub fn apply(&self, command: Command) -> Result<AppState> {
        match command {
            Command::AssignRecipe {
                date,
                meal_type,
                recipe,
            } => Ok(self.update_slot(date, meal_type, |slot| slot.recipe = Some(recipe))),
            Command::ClearSlot { date, meal_type } => {
                Ok(self.update_slot(date, meal_type, |slot| slot.recipe = None))
            }
            Command::ToggleCompletion { date, meal_type } => {
                Ok(self.update_slot(date, meal_type, |slot| slot.completed = !slot.completed))
            }
            Command::SetSlotTime {
                date,
                meal_type,
                time,
            } => {
                let time: SlotTime = time.parse()?;
                Ok(self.update_slot(date, meal_type, |slot| slot.scheduled_time = time))
            }
            Command::ToggleFavorite { recipe_id } => Ok(self.toggle_favorite(recipe_id)),
            Command::AddRecipeToCatalog { recipe } => self.add_recipe(recipe),
            Command::SetBabyAge { months } => Ok(AppState {
                baby: self.baby.with_months_old(months)?,
                ..self.clone()
            }),
            Command::ReanchorWeek { today } => Ok(self.reanchor_week(today)),
        }
    }

    fn update_slot(&self, date: Date, meal_type: MealType, update: impl FnOnce(&mut MealSlot)) -> AppState {
        match self.weekly_plan.update_slot(date, meal_type, update) {
            Some(weekly_plan) => AppState {
                weekly_plan,
                ..self.clone()
            },
            None => {
                tracing::debug!(%date, %meal_type, "date outside planned week, state unchanged");
                self.clone()
            }
        }
    }

    fn toggle_favorite(&self, recipe_id: String) -> AppState {
        let favorites: Favorites = self.favorites.toggled(recipe_id);

        AppState {
            favorites,
            ..self.clone()
        }
    }

    fn add_recipe(&self, recipe: Recipe) -> Result<AppState> {
        let mut catalog = self.catalog.clone();
        catalog.push(recipe)?;

        Ok(AppState {
            catalog,
            ..self.clone()
        })
    }

    /// Same week keeps the plan as is; a new week starts with empty days.
    fn reanchor_week(&self, today: Date) -> AppState {
        let monday = week_start(today);
        if monday == self.weekly_plan.start() {
            return self.clone();
        }

        tracing::info!(from = %self.weekly_plan.start(), to = %monday, "plan re-anchored");

        AppState {
            weekly_plan: WeeklyPlan::starting(monday),
            ..self.clone()
        }
    }
}
