//! Consensus Module
//!
//! Multi-oracle agreement on risk scores:
//! - Deduplicated per-target vote tallies
//! - Quorum detection on exact-value agreement
//! - Pause switch and reentrancy barrier around all mutations

pub mod engine;
pub mod guard;
pub mod ledger;

pub use engine::{OracleConfig, RiskOracle, VoteOutcome};
pub use guard::OperationalGuard;
pub use ledger::VoteLedger;
