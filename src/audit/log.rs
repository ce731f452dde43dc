//! Tamper-evident event log.
//!
//! Append-only, hash-chained record of every committed state transition.

use crate::audit::entry::{EventKind, OracleEvent};
use crate::core::Hash256;
use serde::{Deserialize, Serialize};

/// Result of log verification.
#[derive(Clone, Debug)]
pub struct LogVerification {
    /// Whether every link in the chain checks out
    pub valid: bool,
    /// Number of events verified
    pub events_verified: u64,
    /// Index of the first corrupted event (if any)
    pub first_invalid_index: Option<usize>,
}

/// Append-only audit log with hash chaining.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<OracleEvent>,
    head_hash: Hash256,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain and append an event. Returns the appended event's hash.
    pub fn append(&mut self, mut event: OracleEvent) -> Hash256 {
        event.prev_hash = self.head_hash.clone();
        let hash = event.compute_hash();
        self.head_hash = hash.clone();
        self.events.push(event);
        hash
    }

    /// Walk the chain and verify every link.
    pub fn verify(&self) -> LogVerification {
        let mut prev_hash = Hash256::zero();
        for (index, event) in self.events.iter().enumerate() {
            let mut copy = event.clone();
            let recomputed = copy.compute_hash();
            if event.prev_hash != prev_hash || event.entry_hash != recomputed {
                return LogVerification {
                    valid: false,
                    events_verified: index as u64,
                    first_invalid_index: Some(index),
                };
            }
            prev_hash = event.entry_hash.clone();
        }
        LogVerification {
            valid: true,
            events_verified: self.events.len() as u64,
            first_invalid_index: None,
        }
    }

    /// Hash of the newest event (zero when empty).
    pub fn head_hash(&self) -> &Hash256 {
        &self.head_hash
    }

    /// Number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &OracleEvent> {
        self.events.iter()
    }

    /// The newest event.
    pub fn last(&self) -> Option<&OracleEvent> {
        self.events.last()
    }

    /// Events of one kind, oldest first.
    pub fn of_kind(&self, kind: &EventKind) -> Vec<&OracleEvent> {
        self.events.iter().filter(|e| &e.kind == kind).collect()
    }

    #[cfg(test)]
    pub(crate) fn events_mut(&mut self) -> &mut Vec<OracleEvent> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Address;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.head_hash(), &Hash256::zero());
        assert!(log.verify().valid);
    }

    #[test]
    fn test_append_chains_events() {
        let mut log = EventLog::new();
        let h1 = log.append(OracleEvent::new(EventKind::Deployed, addr(1)));
        let h2 = log.append(OracleEvent::new(EventKind::Paused, addr(1)));

        assert_eq!(log.len(), 2);
        assert_ne!(h1, h2);
        assert_eq!(log.head_hash(), &h2);

        let events: Vec<_> = log.iter().collect();
        assert_eq!(events[0].prev_hash, Hash256::zero());
        assert_eq!(events[1].prev_hash, h1);
    }

    #[test]
    fn test_verify_clean_log() {
        let mut log = EventLog::new();
        for _ in 0..5 {
            log.append(OracleEvent::new(EventKind::OracleAdded, addr(1)));
        }
        let verification = log.verify();
        assert!(verification.valid);
        assert_eq!(verification.events_verified, 5);
        assert!(verification.first_invalid_index.is_none());
    }

    #[test]
    fn test_verify_detects_tampering() {
        let mut log = EventLog::new();
        log.append(OracleEvent::new(EventKind::Deployed, addr(1)));
        log.append(
            OracleEvent::new(EventKind::ConsensusReached, addr(2)).with_detail("score", 5u8),
        );
        log.append(OracleEvent::new(EventKind::Paused, addr(1)));

        log.events_mut()[1]
            .details
            .insert("score".to_string(), serde_json::json!(9));

        let verification = log.verify();
        assert!(!verification.valid);
        assert_eq!(verification.first_invalid_index, Some(1));
        assert_eq!(verification.events_verified, 1);
    }

    #[test]
    fn test_of_kind_filters() {
        let mut log = EventLog::new();
        log.append(OracleEvent::new(EventKind::Deployed, addr(1)));
        log.append(OracleEvent::new(EventKind::OracleAdded, addr(1)));
        log.append(OracleEvent::new(EventKind::OracleAdded, addr(1)));

        assert_eq!(log.of_kind(&EventKind::OracleAdded).len(), 2);
        assert_eq!(log.of_kind(&EventKind::Paused).len(), 0);
    }
}
