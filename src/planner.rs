use littlespoon_mealplan::{
    AppState, BabyProfile, Clock, Command, FixedClock, Store, SystemClock, sample_plan,
};
use littlespoon_recipe::Catalog;
use time::Date;

use crate::config::Config;

/// A store built from configuration, with the day it was built on.
pub struct Session {
    pub store: Store,
    pub today: Date,
}

impl Session {
    /// Uses `week.anchor` as today when set, the clock in `week.timezone`
    /// otherwise.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config.anchor_date().map_err(anyhow::Error::msg)? {
            Some(date) => Self::with_clock(config, &FixedClock(date)),
            None => Self::with_clock(config, &SystemClock::new(&config.week.timezone)?),
        }
    }

    pub fn with_clock(config: &Config, clock: &impl Clock) -> anyhow::Result<Self> {
        let baby = BabyProfile::new(config.baby.name.to_owned(), config.baby.months_old)?;
        let mut store = Store::new(AppState::new(baby, Catalog::builtin(), clock));

        for input in config.recipes.iter().cloned() {
            let recipe = input.into_recipe(store.state().catalog().next_id())?;
            store.dispatch(Command::add_recipe(recipe))?;
        }

        if config.plan.sample {
            let commands = sample_plan(store.state());
            store.dispatch_all(commands)?;
        }

        for id in &config.plan.favorites {
            if !store.state().is_favorite(id) {
                store.dispatch(Command::toggle_favorite(id))?;
            }
        }

        tracing::info!(
            week = %store.state().weekly_plan().start(),
            recipes = store.state().catalog().len(),
            favorites = store.state().favorites().len(),
            "planner ready"
        );

        Ok(Self {
            store,
            today: clock.today(),
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }
}
