//! Audit Trail
//!
//! Tamper-evident record of engine state transitions:
//! - One hash-chained event per committed transition
//! - Full-chain verification pinpointing the first corrupted link

pub mod entry;
pub mod log;

pub use entry::{EventId, EventKind, OracleEvent};
pub use log::{EventLog, LogVerification};
