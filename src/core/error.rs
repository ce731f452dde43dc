//! Error types for ORCA.

use crate::core::types::Address;
use thiserror::Error;

/// Result type alias for ORCA operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ORCA operations.
///
/// Every failure aborts the whole call with no partial state change; the
/// engine never retries on its own.
#[derive(Error, Debug)]
pub enum Error {
    // Input validation errors
    #[error("invalid address: the zero address is not a valid target")]
    InvalidAddress,

    #[error("invalid risk score: {0} (must be within 1-10)")]
    InvalidRiskScore(u8),

    #[error("reason required: votes must carry a non-empty justification")]
    ReasonRequired,

    // Authorization errors
    #[error("caller {0} is not the owner")]
    NotOwner(Address),

    #[error("caller {0} is not an active oracle")]
    NotActiveOracle(Address),

    // Oracle lifecycle errors
    #[error("oracle {0} is already active")]
    OracleAlreadyActive(Address),

    #[error("oracle {0} is not active")]
    OracleNotActive(Address),

    // Emergency path errors
    #[error("emergency updates only for high risk: score {0} is below the threshold")]
    EmergencyScoreTooLow(u8),

    // Operational guard errors
    #[error("engine is paused")]
    Paused,

    #[error("engine is not paused")]
    NotPaused,

    #[error("reentrant call rejected")]
    ReentrantCall,

    // Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
