//! Risk Model
//!
//! Canonical risk state for ledger addresses:
//! - Finalized risk records with provenance
//! - Coarse risk categorization (SAFE / MEDIUM / HIGH)

pub mod category;
pub mod record;

pub use category::RiskCategory;
pub use record::{RiskRecord, ScoreSource};
