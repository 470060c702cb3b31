use littlespoon_shared::AgeBand;
use serde::{Deserialize, Serialize};

/// What to expect from the baby during one age band.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DevelopmentStage {
    pub band: AgeBand,
    pub title: String,
    pub foods_to_try: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub skills: Vec<String>,
    pub tips: String,
}
