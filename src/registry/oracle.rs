//! Authorized reporter registry.
//!
//! Oracles are deactivated on removal, never deleted; their identity and
//! vote history stay available for audit.

use crate::core::{now, Address, Error, Result, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a registered oracle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OracleInfo {
    /// Whether the oracle may currently vote
    pub is_active: bool,
    /// Reputation score (0-100)
    pub reputation_score: u8,
    /// Number of votes this oracle has had recorded
    pub votes_cast: u64,
    /// When the oracle was first registered
    pub registered_at: Timestamp,
}

/// Registry of authorized reporter addresses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OracleRegistry {
    /// All oracles ever registered, keyed by address
    oracles: HashMap<Address, OracleInfo>,
    /// Count of currently active oracles
    active_count: usize,
    /// Cumulative count of registration events
    total_registered: u64,
}

impl OracleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new oracle, or reactivate a previously removed one.
    ///
    /// A reactivated oracle gets the supplied reputation, not its old one;
    /// its historical `votes_cast` is retained.
    pub fn register(&mut self, oracle: Address, reputation: u8) -> Result<()> {
        match self.oracles.get_mut(&oracle) {
            Some(info) if info.is_active => Err(Error::OracleAlreadyActive(oracle)),
            Some(info) => {
                info.is_active = true;
                info.reputation_score = reputation;
                self.active_count += 1;
                self.total_registered += 1;
                Ok(())
            }
            None => {
                self.oracles.insert(
                    oracle,
                    OracleInfo {
                        is_active: true,
                        reputation_score: reputation,
                        votes_cast: 0,
                        registered_at: now(),
                    },
                );
                self.active_count += 1;
                self.total_registered += 1;
                Ok(())
            }
        }
    }

    /// Deactivate an oracle. The entry is kept for audit.
    pub fn deactivate(&mut self, oracle: Address) -> Result<()> {
        match self.oracles.get_mut(&oracle) {
            Some(info) if info.is_active => {
                info.is_active = false;
                self.active_count -= 1;
                Ok(())
            }
            _ => Err(Error::OracleNotActive(oracle)),
        }
    }

    /// Whether the address is a currently active oracle.
    pub fn is_active(&self, oracle: &Address) -> bool {
        self.oracles.get(oracle).map_or(false, |info| info.is_active)
    }

    /// Look up an oracle's metadata.
    pub fn get(&self, oracle: &Address) -> Option<&OracleInfo> {
        self.oracles.get(oracle)
    }

    /// Account a recorded vote to the oracle.
    pub fn record_vote(&mut self, oracle: &Address) {
        if let Some(info) = self.oracles.get_mut(oracle) {
            info.votes_cast += 1;
        }
    }

    /// Count of currently active oracles.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Cumulative count of registration events (reactivations included).
    pub fn total_registered(&self) -> u64 {
        self.total_registered
    }

    /// Iterate over all oracles ever registered.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &OracleInfo)> {
        self.oracles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_register_oracle() {
        let mut registry = OracleRegistry::new();
        registry.register(addr(1), 80).unwrap();

        let info = registry.get(&addr(1)).unwrap();
        assert!(info.is_active);
        assert_eq!(info.reputation_score, 80);
        assert_eq!(info.votes_cast, 0);
        assert_eq!(registry.active_count(), 1);
        assert_eq!(registry.total_registered(), 1);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = OracleRegistry::new();
        registry.register(addr(1), 80).unwrap();

        let result = registry.register(addr(1), 80);
        assert!(matches!(result, Err(Error::OracleAlreadyActive(_))));
        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn test_deactivate_retains_history() {
        let mut registry = OracleRegistry::new();
        registry.register(addr(1), 80).unwrap();
        registry.record_vote(&addr(1));
        registry.deactivate(addr(1)).unwrap();

        let info = registry.get(&addr(1)).unwrap();
        assert!(!info.is_active);
        assert_eq!(info.votes_cast, 1);
        assert_eq!(registry.active_count(), 0);
        assert_eq!(registry.total_registered(), 1);
    }

    #[test]
    fn test_deactivate_inactive_fails_cleanly() {
        let mut registry = OracleRegistry::new();
        let result = registry.deactivate(addr(9));
        assert!(matches!(result, Err(Error::OracleNotActive(_))));

        registry.register(addr(1), 80).unwrap();
        registry.deactivate(addr(1)).unwrap();
        let result = registry.deactivate(addr(1));
        assert!(matches!(result, Err(Error::OracleNotActive(_))));
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn test_reactivation_uses_new_reputation() {
        let mut registry = OracleRegistry::new();
        registry.register(addr(1), 100).unwrap();
        registry.record_vote(&addr(1));
        registry.deactivate(addr(1)).unwrap();
        registry.register(addr(1), 80).unwrap();

        let info = registry.get(&addr(1)).unwrap();
        assert!(info.is_active);
        assert_eq!(info.reputation_score, 80);
        assert_eq!(info.votes_cast, 1);
        assert_eq!(registry.active_count(), 1);
        assert_eq!(registry.total_registered(), 2);
    }

    #[test]
    fn test_is_active() {
        let mut registry = OracleRegistry::new();
        assert!(!registry.is_active(&addr(1)));
        registry.register(addr(1), 80).unwrap();
        assert!(registry.is_active(&addr(1)));
        registry.deactivate(addr(1)).unwrap();
        assert!(!registry.is_active(&addr(1)));
    }

    #[test]
    fn test_record_vote_unknown_oracle_is_noop() {
        let mut registry = OracleRegistry::new();
        registry.record_vote(&addr(3));
        assert!(registry.get(&addr(3)).is_none());
    }
}
