//! # ORCA - Oracle Risk Consensus Aggregation
//!
//! A multi-oracle risk scoring engine for ledger addresses providing:
//! - **Registry**: authorized reporter lifecycle with reputation metadata
//! - **Consensus**: deduplicated vote tallies finalized at a 3-oracle quorum
//! - **Risk**: finalized records and SAFE/MEDIUM/HIGH categorization
//! - **Audit**: hash-chained event trail of every committed transition
//!
//! ## Quick Start
//!
//! ```rust
//! use orca::consensus::RiskOracle;
//! use orca::core::Address;
//!
//! let owner = Address::new([0xA0; 20]);
//! let mut oracle = RiskOracle::new(owner);
//!
//! let reporter = Address::new([0xA1; 20]);
//! oracle.add_oracle(owner, reporter).unwrap();
//!
//! let target = Address::new([0x10; 20]);
//! oracle.update_risk_score(reporter, target, 8, "drainer pattern").unwrap();
//! assert_eq!(oracle.get_risk(target).unwrap(), 1); // no quorum yet
//! ```

pub mod audit;
pub mod consensus;
pub mod core;
pub mod query;
pub mod registry;
pub mod risk;

pub use crate::consensus::{OracleConfig, RiskOracle, VoteOutcome};
pub use crate::core::error::{Error, Result};
