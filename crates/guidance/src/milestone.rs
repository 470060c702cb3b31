use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Milestone {
    /// Age in months the milestone is usually reached at.
    pub month: u32,
    pub title: String,
    pub description: String,
}

impl Milestone {
    pub fn is_unlocked(&self, age_months: u32) -> bool {
        age_months >= self.month
    }
}
