use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Time, macros::time};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Default,
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
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Time a freshly created slot of this type is scheduled at.
    pub fn default_time(self) -> Time {
        match self {
            MealType::Breakfast => time!(8:00),
            MealType::Lunch => time!(12:00),
            MealType::Dinner => time!(17:30),
            MealType::Snack => time!(10:00),
        }
    }
}
