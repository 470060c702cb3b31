use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Result;

/// Developmental age bucket, in months.
///
/// Every band but the last covers the half-open interval `[min, max)`;
/// `24+` is open-ended. Variants are declared youngest first, so the derived
/// ordering follows age.
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
pub enum AgeBand {
    #[strum(to_string = "4-6 months", serialize = "4-6")]
    #[serde(rename = "4-6 months", alias = "4-6")]
    FourToSix,
    #[strum(to_string = "6-8 months", serialize = "6-8")]
    #[serde(rename = "6-8 months", alias = "6-8")]
    SixToEight,
    #[strum(to_string = "8-10 months", serialize = "8-10")]
    #[serde(rename = "8-10 months", alias = "8-10")]
    EightToTen,
    #[strum(to_string = "10-12 months", serialize = "10-12")]
    #[serde(rename = "10-12 months", alias = "10-12")]
    TenToTwelve,
    #[strum(to_string = "12-18 months", serialize = "12-18")]
    #[serde(rename = "12-18 months", alias = "12-18")]
    TwelveToEighteen,
    #[strum(to_string = "18-24 months", serialize = "18-24")]
    #[serde(rename = "18-24 months", alias = "18-24")]
    EighteenToTwentyFour,
    #[strum(to_string = "24+ months", serialize = "24+")]
    #[serde(rename = "24+ months", alias = "24+")]
    TwentyFourPlus,
}

impl AgeBand {
    pub const FIRST: AgeBand = AgeBand::FourToSix;
    pub const LAST: AgeBand = AgeBand::TwentyFourPlus;

    /// Maps an age in months to its band.
    ///
    /// Ages under four months clamp to the first band and ages from 24
    /// months on land in `24+`. Negative ages are rejected.
    pub fn resolve(age_months: i32) -> Result<Self> {
        if age_months < 0 {
            crate::bail!("age must be a non-negative number of months, got {}", age_months);
        }

        let age = age_months as u32;
        let band = Self::VARIANTS
            .iter()
            .copied()
            .find(|band| band.contains(age))
            .unwrap_or(Self::FIRST);

        Ok(band)
    }

    pub fn min_months(self) -> u32 {
        match self {
            AgeBand::FourToSix => 4,
            AgeBand::SixToEight => 6,
            AgeBand::EightToTen => 8,
            AgeBand::TenToTwelve => 10,
            AgeBand::TwelveToEighteen => 12,
            AgeBand::EighteenToTwentyFour => 18,
            AgeBand::TwentyFourPlus => 24,
        }
    }

    /// Exclusive upper bound, `None` for the open-ended last band.
    pub fn max_months(self) -> Option<u32> {
        match self {
            AgeBand::FourToSix => Some(6),
            AgeBand::SixToEight => Some(8),
            AgeBand::EightToTen => Some(10),
            AgeBand::TenToTwelve => Some(12),
            AgeBand::TwelveToEighteen => Some(18),
            AgeBand::EighteenToTwentyFour => Some(24),
            AgeBand::TwentyFourPlus => None,
        }
    }

    pub fn contains(self, age_months: u32) -> bool {
        age_months >= self.min_months() && self.max_months().is_none_or(|max| age_months < max)
    }

    /// Collapses this band onto a coarser table that stops at `ceiling`.
    pub fn truncate_to(self, ceiling: AgeBand) -> AgeBand {
        self.min(ceiling)
    }

    /// Short label without the unit, e.g. `6-8`.
    pub fn label(self) -> &'static str {
        match self {
            AgeBand::FourToSix => "4-6",
            AgeBand::SixToEight => "6-8",
            AgeBand::EightToTen => "8-10",
            AgeBand::TenToTwelve => "10-12",
            AgeBand::TwelveToEighteen => "12-18",
            AgeBand::EighteenToTwentyFour => "18-24",
            AgeBand::TwentyFourPlus => "24+",
        }
    }
}
