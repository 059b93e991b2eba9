//! Advisory data types and the collaborator trait.

use crate::division::{classify, Division};
use crate::entrant::{Entrant, Gender, SkillTier};
use thiserror::Error;

/// Advisor failure. Never propagated into engine state.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisor credentials are missing")]
    MissingCredentials,

    #[error("advisor unavailable: {0}")]
    Unavailable(String),

    #[error("advisor rejected the request: {0}")]
    Rejected(String),
}

/// The minimal outlier data shared with an advisor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlierProfile {
    pub name: String,
    pub gender: Gender,
    pub tier: SkillTier,
    pub age: u32,
    pub weight: f64,
    pub affiliation: String,
}

impl OutlierProfile {
    /// Division the entrant would be classified into.
    pub fn division(&self) -> Division {
        classify(self.age, self.gender)
    }
}

impl From<&Entrant> for OutlierProfile {
    fn from(e: &Entrant) -> Self {
        Self {
            name: e.name.clone(),
            gender: e.gender,
            tier: e.tier,
            age: e.age,
            weight: e.weight,
            affiliation: e.affiliation.clone(),
        }
    }
}

/// External collaborator producing placement suggestions.
pub trait OutlierAdvisor {
    fn advise(&self, outliers: &[OutlierProfile]) -> Result<String, AdvisoryError>;
}
