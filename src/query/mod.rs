//! Query Facade
//!
//! Read-only surface consumed by presentation layers and collaborators:
//! - Single and batch risk lookups
//! - Category membership checks
//! - Engine statistics

pub mod facade;

pub use facade::ContractStats;
