//! Per-target vote tallies.
//!
//! Votes are keyed by (target, proposed score) and deduplicated by oracle
//! address: one oracle, one vote per target per round. Quorum is evaluated
//! on exact-value agreement only.

use crate::core::Address;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Deduplicated vote sets for all targets in the current rounds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoteLedger {
    /// target -> proposed score -> voters
    votes: HashMap<Address, HashMap<u8, HashSet<Address>>>,
}

impl VoteLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote. Returns `false` if the oracle already voted this
    /// exact score for this target in the current round (no-op).
    pub fn record(&mut self, target: Address, score: u8, voter: Address) -> bool {
        self.votes
            .entry(target)
            .or_default()
            .entry(score)
            .or_default()
            .insert(voter)
    }

    /// Number of distinct oracles that voted this exact score for the target.
    pub fn count(&self, target: &Address, score: u8) -> usize {
        self.votes
            .get(target)
            .and_then(|by_score| by_score.get(&score))
            .map_or(0, HashSet::len)
    }

    /// Whether the oracle has voted this exact score for the target.
    pub fn has_voted(&self, target: &Address, score: u8, voter: &Address) -> bool {
        self.votes
            .get(target)
            .and_then(|by_score| by_score.get(&score))
            .map_or(false, |voters| voters.contains(voter))
    }

    /// Total votes in flight for a target, across all proposed scores.
    pub fn total_for(&self, target: &Address) -> usize {
        self.votes
            .get(target)
            .map_or(0, |by_score| by_score.values().map(HashSet::len).sum())
    }

    /// Clear every vote set for a target. A fresh round begins.
    pub fn clear_target(&mut self, target: &Address) {
        self.votes.remove(target);
    }

    /// Number of targets with votes in flight.
    pub fn targets_in_flight(&self) -> usize {
        self.votes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_record_and_count() {
        let mut ledger = VoteLedger::new();
        assert!(ledger.record(addr(1), 5, addr(10)));
        assert!(ledger.record(addr(1), 5, addr(11)));
        assert_eq!(ledger.count(&addr(1), 5), 2);
        assert_eq!(ledger.count(&addr(1), 6), 0);
    }

    #[test]
    fn test_duplicate_vote_is_noop() {
        let mut ledger = VoteLedger::new();
        assert!(ledger.record(addr(1), 5, addr(10)));
        assert!(!ledger.record(addr(1), 5, addr(10)));
        assert_eq!(ledger.count(&addr(1), 5), 1);
    }

    #[test]
    fn test_different_scores_do_not_combine() {
        let mut ledger = VoteLedger::new();
        ledger.record(addr(1), 5, addr(10));
        ledger.record(addr(1), 6, addr(11));
        assert_eq!(ledger.count(&addr(1), 5), 1);
        assert_eq!(ledger.count(&addr(1), 6), 1);
        assert_eq!(ledger.total_for(&addr(1)), 2);
    }

    #[test]
    fn test_same_oracle_may_vote_other_score() {
        // A changed opinion lands in a different vote set; each set still
        // holds the oracle at most once.
        let mut ledger = VoteLedger::new();
        assert!(ledger.record(addr(1), 5, addr(10)));
        assert!(ledger.record(addr(1), 7, addr(10)));
        assert_eq!(ledger.count(&addr(1), 5), 1);
        assert_eq!(ledger.count(&addr(1), 7), 1);
    }

    #[test]
    fn test_clear_target_starts_fresh_round() {
        let mut ledger = VoteLedger::new();
        ledger.record(addr(1), 5, addr(10));
        ledger.record(addr(1), 6, addr(11));
        ledger.record(addr(2), 5, addr(10));

        ledger.clear_target(&addr(1));
        assert_eq!(ledger.total_for(&addr(1)), 0);
        assert!(ledger.record(addr(1), 5, addr(10)));
        // Other targets are untouched.
        assert_eq!(ledger.count(&addr(2), 5), 1);
    }

    #[test]
    fn test_has_voted() {
        let mut ledger = VoteLedger::new();
        ledger.record(addr(1), 5, addr(10));
        assert!(ledger.has_voted(&addr(1), 5, &addr(10)));
        assert!(!ledger.has_voted(&addr(1), 6, &addr(10)));
        assert!(!ledger.has_voted(&addr(1), 5, &addr(11)));
    }

    #[test]
    fn test_targets_in_flight() {
        let mut ledger = VoteLedger::new();
        assert_eq!(ledger.targets_in_flight(), 0);
        ledger.record(addr(1), 5, addr(10));
        ledger.record(addr(2), 8, addr(10));
        assert_eq!(ledger.targets_in_flight(), 2);
        ledger.clear_target(&addr(1));
        assert_eq!(ledger.targets_in_flight(), 1);
    }
}
