use std::{fmt, str::FromStr, sync::Arc};

use littlespoon_recipe::Recipe;
use littlespoon_shared::MealType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Time, format_description::BorrowedFormatItem, macros::format_description};

const SLOT_TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Time of day a meal is scheduled at, written `HH:MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(Time);

impl SlotTime {
    pub fn new(time: Time) -> Self {
        Self(Time::from_hms(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    pub fn time(&self) -> Time {
        self.0
    }
}

impl From<Time> for SlotTime {
    fn from(value: Time) -> Self {
        Self::new(value)
    }
}

impl FromStr for SlotTime {
    type Err = littlespoon_shared::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Time::parse(s.trim(), SLOT_TIME_FORMAT) {
            Ok(time) => Ok(Self(time)),
            Err(_) => Err(littlespoon_shared::Error::InvalidInput(format!(
                "time must be HH:MM, got `{s}`"
            ))),
        }
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// One (day, meal type) cell of the plan.
///
/// The recipe is shared with the catalog, never copied.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MealSlot {
    pub recipe: Option<Arc<Recipe>>,
    pub scheduled_time: SlotTime,
    pub completed: bool,
}

impl MealSlot {
    pub fn new(meal_type: MealType) -> Self {
        Self {
            recipe: None,
            scheduled_time: meal_type.default_time().into(),
            completed: false,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.recipe.is_some()
    }
}

/// The four slots of a day. Slots are never added or removed.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Meals {
    breakfast: MealSlot,
    lunch: MealSlot,
    dinner: MealSlot,
    snack: MealSlot,
}

impl Default for Meals {
    fn default() -> Self {
        Self {
            breakfast: MealSlot::new(MealType::Breakfast),
            lunch: MealSlot::new(MealType::Lunch),
            dinner: MealSlot::new(MealType::Dinner),
            snack: MealSlot::new(MealType::Snack),
        }
    }
}

impl Meals {
    pub fn get(&self, meal_type: MealType) -> &MealSlot {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    pub fn get_mut(&mut self, meal_type: MealType) -> &mut MealSlot {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    /// Slots in meal type declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MealType, &MealSlot)> {
        [
            (MealType::Breakfast, &self.breakfast),
            (MealType::Lunch, &self.lunch),
            (MealType::Dinner, &self.dinner),
            (MealType::Snack, &self.snack),
        ]
        .into_iter()
    }
}
