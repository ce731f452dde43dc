//! Risk oracle engine orchestrating registry, votes, and commits.
//!
//! Combines oracle authorization, deduplicated vote tallying, quorum
//! detection, and the owner's emergency override behind a single guard.

use crate::audit::{EventKind, EventLog, OracleEvent};
use crate::consensus::guard::OperationalGuard;
use crate::consensus::ledger::VoteLedger;
use crate::core::{now, Address, Error, Result, Timestamp};
use crate::registry::OracleRegistry;
use crate::risk::{RiskRecord, ScoreSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Configuration for the risk oracle engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Distinct agreeing oracles required to finalize a score
    pub quorum: usize,
    /// Lowest valid risk score
    pub min_score: u8,
    /// Highest valid risk score
    pub max_score: u8,
    /// Lowest score the emergency path may assign
    pub emergency_floor: u8,
    /// Score reported for targets with no record
    pub default_score: u8,
    /// Reputation granted to the deploying owner
    pub owner_reputation: u8,
    /// Reputation granted to subsequently added oracles
    pub oracle_reputation: u8,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            quorum: 3,
            min_score: 1,
            max_score: 10,
            emergency_floor: 8,
            default_score: 1,
            owner_reputation: 100,
            oracle_reputation: 80,
        }
    }
}

/// What a vote submission did.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// Whether the vote was newly recorded (`false` = duplicate no-op)
    pub recorded: bool,
    /// Tally for (target, score) after this submission
    pub votes: usize,
    /// Quorum the tally is measured against
    pub quorum: usize,
    /// Whether this submission finalized the score
    pub finalized: bool,
}

/// Multi-oracle risk scoring engine.
///
/// All mutating entry points take the caller's address explicitly; there is
/// no ambient sender. Mutations run to completion single-writer (`&mut
/// self`) and either fully commit or fully reject.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskOracle {
    /// The privileged operator, self-registered as the first oracle
    owner: Address,
    /// When the engine was constructed
    deployed_at: Timestamp,
    /// Engine configuration
    config: OracleConfig,
    /// Authorized reporters
    pub(crate) registry: OracleRegistry,
    /// In-flight votes for the current rounds
    pub(crate) ledger: VoteLedger,
    /// Finalized risk records
    pub(crate) records: HashMap<Address, RiskRecord>,
    /// Pause switch + reentrancy barrier
    pub(crate) guard: OperationalGuard,
    /// Audit trail of committed transitions
    pub(crate) events: EventLog,
}

impl RiskOracle {
    /// Create an engine owned by `owner`, who becomes the first oracle.
    pub fn new(owner: Address) -> Self {
        Self::with_config(owner, OracleConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(owner: Address, config: OracleConfig) -> Self {
        let mut registry = OracleRegistry::new();
        registry
            .register(owner, config.owner_reputation)
            .expect("empty registry accepts the owner");

        let mut events = EventLog::new();
        events.append(
            OracleEvent::new(EventKind::Deployed, owner)
                .with_detail("owner_reputation", config.owner_reputation),
        );

        info!(owner = %owner, "risk oracle deployed");

        Self {
            owner,
            deployed_at: now(),
            config,
            registry,
            ledger: VoteLedger::new(),
            records: HashMap::new(),
            guard: OperationalGuard::new(),
            events,
        }
    }

    /// The privileged operator address.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// When the engine was constructed.
    pub fn deployment_time(&self) -> Timestamp {
        self.deployed_at
    }

    /// The engine configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Submit an oracle's risk score vote for a target.
    ///
    /// Preconditions are checked in order: non-zero target, caller is an
    /// active oracle, score within bounds, non-empty reason, engine not
    /// paused. A duplicate identical vote is a no-op, not an error. When the
    /// tally reaches quorum the score is finalized and the target's round
    /// is cleared.
    pub fn update_risk_score(
        &mut self,
        caller: Address,
        target: Address,
        score: u8,
        reason: &str,
    ) -> Result<VoteOutcome> {
        self.guard.enter()?;
        let result = self.apply_vote(caller, target, score, reason);
        self.guard.exit();
        result
    }

    fn apply_vote(
        &mut self,
        caller: Address,
        target: Address,
        score: u8,
        reason: &str,
    ) -> Result<VoteOutcome> {
        if target.is_zero() {
            return Err(Error::InvalidAddress);
        }
        if !self.registry.is_active(&caller) {
            return Err(Error::NotActiveOracle(caller));
        }
        if score < self.config.min_score || score > self.config.max_score {
            return Err(Error::InvalidRiskScore(score));
        }
        if reason.is_empty() {
            return Err(Error::ReasonRequired);
        }
        self.guard.ensure_not_paused()?;

        let recorded = self.ledger.record(target, score, caller);
        if recorded {
            self.registry.record_vote(&caller);
        }

        let votes = self.ledger.count(&target, score);
        let quorum = self.config.quorum;

        if votes >= quorum {
            self.commit(target, score, ScoreSource::Consensus);
            self.events.append(
                OracleEvent::new(EventKind::ConsensusReached, caller)
                    .with_subject(target)
                    .with_detail("score", score)
                    .with_detail("votes", votes as u64)
                    .with_detail("reason", reason),
            );
            info!(address = %target, score, votes, "consensus reached");
            return Ok(VoteOutcome {
                recorded,
                votes,
                quorum,
                finalized: true,
            });
        }

        debug!(address = %target, score, votes, recorded, "vote tallied");
        Ok(VoteOutcome {
            recorded,
            votes,
            quorum,
            finalized: false,
        })
    }

    /// Owner-only bypass of consensus for newly discovered severe threats.
    ///
    /// The score must be in the HIGH band (`emergency_floor` and up); this
    /// path exists to fast-track flagging, never to lower risk. Any in-flight
    /// votes for the target are discarded.
    pub fn emergency_update(
        &mut self,
        caller: Address,
        target: Address,
        score: u8,
        reason: &str,
    ) -> Result<()> {
        self.guard.enter()?;
        let result = self.apply_emergency(caller, target, score, reason);
        self.guard.exit();
        result
    }

    fn apply_emergency(
        &mut self,
        caller: Address,
        target: Address,
        score: u8,
        reason: &str,
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        if target.is_zero() {
            return Err(Error::InvalidAddress);
        }
        if score > self.config.max_score {
            return Err(Error::InvalidRiskScore(score));
        }
        if score < self.config.emergency_floor {
            return Err(Error::EmergencyScoreTooLow(score));
        }
        self.guard.ensure_not_paused()?;

        let discarded = self.ledger.total_for(&target);
        self.commit(target, score, ScoreSource::EmergencyOverride);
        self.events.append(
            OracleEvent::new(EventKind::EmergencyUpdate, caller)
                .with_subject(target)
                .with_detail("score", score)
                .with_detail("reason", reason)
                .with_detail("votes_discarded", discarded as u64),
        );
        warn!(address = %target, score, discarded, "emergency risk update");
        Ok(())
    }

    /// Owner-only: authorize a new oracle (or reactivate a removed one).
    pub fn add_oracle(&mut self, caller: Address, oracle: Address) -> Result<()> {
        self.guard.enter()?;
        let result = self.apply_add_oracle(caller, oracle);
        self.guard.exit();
        result
    }

    fn apply_add_oracle(&mut self, caller: Address, oracle: Address) -> Result<()> {
        self.ensure_owner(caller)?;
        if oracle.is_zero() {
            return Err(Error::InvalidAddress);
        }
        self.guard.ensure_not_paused()?;

        let reputation = self.config.oracle_reputation;
        self.registry.register(oracle, reputation)?;
        self.events.append(
            OracleEvent::new(EventKind::OracleAdded, caller)
                .with_subject(oracle)
                .with_detail("reputation", reputation),
        );
        info!(oracle = %oracle, reputation, "oracle added");
        Ok(())
    }

    /// Owner-only: deactivate an oracle. Its history is retained.
    pub fn remove_oracle(&mut self, caller: Address, oracle: Address) -> Result<()> {
        self.guard.enter()?;
        let result = self.apply_remove_oracle(caller, oracle);
        self.guard.exit();
        result
    }

    fn apply_remove_oracle(&mut self, caller: Address, oracle: Address) -> Result<()> {
        self.ensure_owner(caller)?;
        if oracle.is_zero() {
            return Err(Error::InvalidAddress);
        }
        self.guard.ensure_not_paused()?;

        self.registry.deactivate(oracle)?;
        self.events
            .append(OracleEvent::new(EventKind::OracleRemoved, caller).with_subject(oracle));
        info!(oracle = %oracle, "oracle removed");
        Ok(())
    }

    /// Owner-only: halt all mutating entry points.
    pub fn pause(&mut self, caller: Address) -> Result<()> {
        self.guard.enter()?;
        let result = self.apply_pause(caller);
        self.guard.exit();
        result
    }

    fn apply_pause(&mut self, caller: Address) -> Result<()> {
        self.ensure_owner(caller)?;
        self.guard.pause()?;
        self.events.append(OracleEvent::new(EventKind::Paused, caller));
        warn!("engine paused");
        Ok(())
    }

    /// Owner-only: resume mutating entry points.
    pub fn unpause(&mut self, caller: Address) -> Result<()> {
        self.guard.enter()?;
        let result = self.apply_unpause(caller);
        self.guard.exit();
        result
    }

    fn apply_unpause(&mut self, caller: Address) -> Result<()> {
        self.ensure_owner(caller)?;
        self.guard.unpause()?;
        self.events.append(OracleEvent::new(EventKind::Unpaused, caller));
        info!("engine unpaused");
        Ok(())
    }

    fn ensure_owner(&self, caller: Address) -> Result<()> {
        if caller != self.owner {
            return Err(Error::NotOwner(caller));
        }
        Ok(())
    }

    /// Finalize a score and clear the target's round.
    fn commit(&mut self, target: Address, score: u8, source: ScoreSource) {
        self.records
            .insert(target, RiskRecord::new(score, now(), source));
        self.ledger.clear_target(&target);
    }
}
