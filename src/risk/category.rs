//! Coarse risk categorization.

use serde::{Deserialize, Serialize};

/// Risk band derived from a numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Scores 1-3
    Safe,
    /// Scores 4-7
    Medium,
    /// Scores 8-10
    High,
}

impl RiskCategory {
    /// Classify a score into its band.
    ///
    /// Total over `u8`: anything below the valid floor classifies Safe,
    /// anything above the ceiling High.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => RiskCategory::Safe,
            4..=7 => RiskCategory::Medium,
            _ => RiskCategory::High,
        }
    }

    /// Whether the score falls in this band.
    pub fn contains(&self, score: u8) -> bool {
        Self::from_score(score) == *self
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::Safe => write!(f, "SAFE"),
            RiskCategory::Medium => write!(f, "MEDIUM"),
            RiskCategory::High => write!(f, "HIGH"),
        }
    }
}
