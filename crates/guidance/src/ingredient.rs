use std::collections::BTreeMap;

use littlespoon_shared::{AgeBand, Result};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const NO_ADVICE: &str = "No specific advice for this age.";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum GuideCategory {
    Produce,
    Protein,
    Grain,
    Dairy,
    Pantry,
}

/// How to serve one ingredient as the baby grows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IngredientGuide {
    pub id: String,
    pub name: String,
    pub category: GuideCategory,
    pub image_ref: String,
    pub preparation: BTreeMap<AgeBand, String>,
    pub choking_hazards: String,
    pub nutrition: String,
}

impl IngredientGuide {
    /// Advice for the band `age_months` falls in.
    ///
    /// Falls back to the advice of the youngest band that has any, then to
    /// [`NO_ADVICE`].
    pub fn preparation_for(&self, age_months: i32) -> Result<&str> {
        let band = AgeBand::resolve(age_months)?;

        let advice = self
            .preparation
            .get(&band)
            .or_else(|| self.preparation.values().next())
            .map(String::as_str)
            .unwrap_or(NO_ADVICE);

        Ok(advice)
    }
}
