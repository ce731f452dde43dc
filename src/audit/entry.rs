//! Audit event structure.
//!
//! One immutable event per committed state transition.

use crate::core::{now, Address, Hash256, Timestamp};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::collections::HashMap;

/// Unique event identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    /// Create a new event ID.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Generate a unique ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State transitions that produce an audit event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Engine constructed, owner self-registered
    Deployed,
    /// Oracle registered or reactivated
    OracleAdded,
    /// Oracle deactivated
    OracleRemoved,
    /// Quorum finalized a risk score
    ConsensusReached,
    /// Owner bypassed consensus for a severe threat
    EmergencyUpdate,
    /// Pause switch turned on
    Paused,
    /// Pause switch turned off
    Unpaused,
}

impl EventKind {
    fn as_str(&self) -> &'static str {
        match self {
            EventKind::Deployed => "DEPLOYED",
            EventKind::OracleAdded => "ORACLE_ADDED",
            EventKind::OracleRemoved => "ORACLE_REMOVED",
            EventKind::ConsensusReached => "CONSENSUS_REACHED",
            EventKind::EmergencyUpdate => "EMERGENCY_UPDATE",
            EventKind::Paused => "PAUSED",
            EventKind::Unpaused => "UNPAUSED",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A hash-chained audit event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OracleEvent {
    /// Event ID
    pub id: EventId,
    /// What happened
    pub kind: EventKind,
    /// When it happened
    pub timestamp: Timestamp,
    /// Who triggered it
    pub actor: Address,
    /// The address the transition concerns (if any)
    pub subject: Option<Address>,
    /// Structured transition details
    pub details: HashMap<String, serde_json::Value>,
    /// Hash of the previous event in the log
    pub prev_hash: Hash256,
    /// Content hash of this event
    pub entry_hash: Hash256,
}

impl OracleEvent {
    /// Create a new event. The chain hashes are filled in on append.
    pub fn new(kind: EventKind, actor: Address) -> Self {
        Self {
            id: EventId::generate(),
            kind,
            timestamp: now(),
            actor,
            subject: None,
            details: HashMap::new(),
            prev_hash: Hash256::zero(),
            entry_hash: Hash256::zero(),
        }
    }

    /// Set the subject address.
    pub fn with_subject(mut self, subject: Address) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Add a detail field.
    pub fn with_detail(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.details.insert(key.to_string(), v);
        }
        self
    }

    /// Compute the content hash (SHA3-256).
    /// Covers all fields except the hash itself.
    pub fn compute_hash(&mut self) -> Hash256 {
        let timestamp_str = self.timestamp.to_rfc3339();
        let subject_bytes = self.subject.map(|s| s.0).unwrap_or([0u8; 20]);
        let details_json = serde_json::to_string(&sorted_details(&self.details)).unwrap_or_default();

        let mut hasher = Sha3_256::new();
        hasher.update(self.id.as_str().as_bytes());
        hasher.update(self.kind.as_str().as_bytes());
        hasher.update(timestamp_str.as_bytes());
        hasher.update(self.actor.as_bytes());
        hasher.update(subject_bytes);
        hasher.update(details_json.as_bytes());
        hasher.update(self.prev_hash.as_bytes());

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hasher.finalize());
        let hash = Hash256::new(bytes);
        self.entry_hash = hash.clone();
        hash
    }
}

/// Details in key order so the hash is independent of map iteration order.
fn sorted_details(
    details: &HashMap<String, serde_json::Value>,
) -> std::collections::BTreeMap<&String, &serde_json::Value> {
    details.iter().collect()
}
