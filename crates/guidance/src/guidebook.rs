use littlespoon_shared::{AgeBand, Result};
use serde::{Deserialize, Serialize};

use crate::{DevelopmentStage, IngredientGuide, Milestone};

/// Reference tables behind the guidance screens.
///
/// Every lookup takes the baby's age in months and resolves it with
/// [`AgeBand::resolve`], so a negative age fails the same way everywhere.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Guidebook {
    stages: Vec<DevelopmentStage>,
    milestones: Vec<Milestone>,
    ingredients: Vec<IngredientGuide>,
}

impl Guidebook {
    pub fn new(
        mut stages: Vec<DevelopmentStage>,
        mut milestones: Vec<Milestone>,
        ingredients: Vec<IngredientGuide>,
    ) -> Self {
        stages.sort_by_key(|stage| stage.band);
        milestones.sort_by_key(|milestone| milestone.month);

        Self {
            stages,
            milestones,
            ingredients,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            crate::seed::stages(),
            crate::seed::milestones(),
            crate::seed::ingredients(),
        )
    }

    pub fn stages(&self) -> &[DevelopmentStage] {
        &self.stages
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn ingredients(&self) -> &[IngredientGuide] {
        &self.ingredients
    }

    /// Stage for `age_months`. Ages past the oldest stage in the table get
    /// that oldest stage.
    pub fn stage_for(&self, age_months: i32) -> Result<Option<&DevelopmentStage>> {
        let band = AgeBand::resolve(age_months)?;
        let Some(ceiling) = self.stages.last().map(|stage| stage.band) else {
            return Ok(None);
        };

        let band = band.truncate_to(ceiling);
        tracing::trace!(age_months, %band, "development stage resolved");

        Ok(self.stages.iter().find(|stage| stage.band == band))
    }

    /// First milestone not reached yet, or the last one once all are.
    pub fn next_milestone(&self, age_months: i32) -> Result<Option<&Milestone>> {
        let age = months(age_months)?;

        Ok(self
            .milestones
            .iter()
            .find(|milestone| milestone.month > age)
            .or_else(|| self.milestones.last()))
    }

    /// Percentage of the way to the next milestone, capped at 100.
    pub fn progress(&self, age_months: i32) -> Result<u32> {
        let age = months(age_months)?;

        let progress = match self.next_milestone(age_months)? {
            Some(next) if next.month > 0 => (age.saturating_mul(100) / next.month).min(100),
            _ => 100,
        };

        Ok(progress)
    }

    /// Every milestone with whether `age_months` has reached it.
    pub fn milestone_status(&self, age_months: i32) -> Result<Vec<(&Milestone, bool)>> {
        let age = months(age_months)?;

        Ok(self
            .milestones
            .iter()
            .map(|milestone| (milestone, milestone.is_unlocked(age)))
            .collect())
    }

    pub fn ingredient(&self, id: &str) -> Option<&IngredientGuide> {
        self.ingredients.iter().find(|guide| guide.id == id)
    }

    /// Guides whose name contains `text`, ignoring case. Empty text matches all.
    pub fn search_ingredients(&self, text: &str) -> Vec<&IngredientGuide> {
        let text = text.trim().to_lowercase();

        self.ingredients
            .iter()
            .filter(|guide| guide.name.to_lowercase().contains(&text))
            .collect()
    }
}

fn months(age_months: i32) -> Result<u32> {
    AgeBand::resolve(age_months)?;

    Ok(age_months.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_sorted() {
        let book = Guidebook::builtin();

        assert!(book.stages().windows(2).all(|w| w[0].band < w[1].band));
        assert!(book.milestones().windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn empty_book_has_no_stage() {
        let book = Guidebook::default();

        assert_eq!(book.stage_for(7).unwrap(), None);
        assert_eq!(book.next_milestone(7).unwrap(), None);
        assert_eq!(book.progress(7).unwrap(), 100);
    }

    #[test]
    fn months_rejects_negative() {
        assert!(months(-1).unwrap_err().is_invalid_input());
        assert_eq!(months(0).unwrap(), 0);
    }
}
