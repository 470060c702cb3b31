use std::collections::BTreeSet;

use littlespoon_shared::{AgeBand, Ingredient, MealType};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub image_ref: String,
    pub age_groups: BTreeSet<AgeBand>,
    pub meal_type: MealType,
    pub ingredients: Vec<Ingredient>,
    pub prep_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_highlight: Option<String>,
}

impl Recipe {
    pub fn suits(&self, band: AgeBand) -> bool {
        self.age_groups.contains(&band)
    }

    pub fn youngest_band(&self) -> Option<AgeBand> {
        self.age_groups.first().copied()
    }

    /// Badge shown on recipe cards, e.g. `6m+`.
    pub fn starting_age_badge(&self) -> Option<String> {
        self.youngest_band()
            .map(|band| format!("{}m+", band.min_months()))
    }
}
