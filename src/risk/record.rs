//! Finalized risk records.

use crate::core::Timestamp;
use serde::{Deserialize, Serialize};

/// How a risk record was finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSource {
    /// Committed by the quorum of agreeing oracles
    Consensus,
    /// Written directly by the owner's emergency path
    EmergencyOverride,
}

/// The canonical risk state for a target address.
///
/// Absence of a record means the target behaves as score 1
/// (unknown, low risk by default).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Current finalized score (1-10)
    pub score: u8,
    /// When the record was last finalized
    pub last_updated: Timestamp,
    /// Which path finalized the record
    pub finalized_by: ScoreSource,
}

impl RiskRecord {
    /// Create a freshly finalized record.
    pub fn new(score: u8, last_updated: Timestamp, finalized_by: ScoreSource) -> Self {
        Self {
            score,
            last_updated,
            finalized_by,
        }
    }
}
