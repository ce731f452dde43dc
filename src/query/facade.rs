//! Read-only accessors over committed engine state.
//!
//! Queries never mutate and stay available while the engine is paused.

use crate::audit::EventLog;
use crate::consensus::engine::RiskOracle;
use crate::core::{now, Address, Error, Result};
use crate::registry::OracleInfo;
use crate::risk::{RiskCategory, RiskRecord};

/// Aggregate engine statistics.
#[derive(Clone, Debug)]
pub struct ContractStats {
    /// Cumulative count of oracle registrations (active or not)
    pub total_oracles: u64,
    /// Elapsed time since the engine was constructed
    pub contract_age: chrono::Duration,
}

impl RiskOracle {
    /// Current risk score for a target, or the default (1) when no record
    /// exists. The zero address is rejected.
    pub fn get_risk(&self, target: Address) -> Result<u8> {
        if target.is_zero() {
            return Err(Error::InvalidAddress);
        }
        Ok(self
            .records
            .get(&target)
            .map_or(self.config().default_score, |record| record.score))
    }

    /// Risk scores for a batch of targets, in input order.
    ///
    /// Every address is validated up front; a zero address anywhere fails
    /// the whole batch before any element is resolved.
    pub fn get_batch_risk_scores(&self, targets: &[Address]) -> Result<Vec<u8>> {
        if targets.iter().any(Address::is_zero) {
            return Err(Error::InvalidAddress);
        }
        targets.iter().map(|target| self.get_risk(*target)).collect()
    }

    /// Whether the target's current score falls in the category.
    pub fn is_in_risk_category(&self, target: Address, category: RiskCategory) -> Result<bool> {
        let score = self.get_risk(target)?;
        Ok(category.contains(score))
    }

    /// Aggregate statistics for the engine.
    pub fn get_contract_stats(&self) -> ContractStats {
        ContractStats {
            total_oracles: self.registry.total_registered(),
            contract_age: now() - self.deployment_time(),
        }
    }

    /// Count of currently active oracles.
    pub fn get_active_oracle_count(&self) -> usize {
        self.registry.active_count()
    }

    /// Metadata for a registered oracle (active or not).
    pub fn oracle(&self, oracle: &Address) -> Option<&OracleInfo> {
        self.registry.get(oracle)
    }

    /// The finalized record for a target, if one exists.
    pub fn record(&self, target: &Address) -> Option<&RiskRecord> {
        self.records.get(target)
    }

    /// In-flight tally for (target, score) in the current round.
    pub fn votes_for(&self, target: &Address, score: u8) -> usize {
        self.ledger.count(target, score)
    }

    /// Whether the pause switch is on.
    pub fn is_paused(&self) -> bool {
        self.guard.is_paused()
    }

    /// The audit trail of committed transitions.
    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
