//! Oracle Registry
//!
//! Tracks which addresses are authorized reporters:
//! - Registration and reactivation with reputation bootstrap
//! - Deactivation that retains history for audit
//! - Active and cumulative oracle counts

pub mod oracle;

pub use oracle::{OracleInfo, OracleRegistry};
