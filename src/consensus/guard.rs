//! Cross-cutting operational guard.
//!
//! A pause switch halting all mutating entry points, and a non-reentrant
//! flag held for the duration of each mutating call.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Pause switch and reentrancy barrier shared by all mutating entry points.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationalGuard {
    paused: bool,
    #[serde(skip)]
    entered: bool,
}

impl OperationalGuard {
    /// Create a guard in the running, not-entered state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the non-reentrant barrier.
    pub fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Err(Error::ReentrantCall);
        }
        self.entered = true;
        Ok(())
    }

    /// Release the non-reentrant barrier.
    pub fn exit(&mut self) {
        self.entered = false;
    }

    /// Fail with `Paused` while the pause switch is on.
    pub fn ensure_not_paused(&self) -> Result<()> {
        if self.paused {
            return Err(Error::Paused);
        }
        Ok(())
    }

    /// Turn the pause switch on.
    pub fn pause(&mut self) -> Result<()> {
        if self.paused {
            return Err(Error::Paused);
        }
        self.paused = true;
        Ok(())
    }

    /// Turn the pause switch off.
    pub fn unpause(&mut self) -> Result<()> {
        if !self.paused {
            return Err(Error::NotPaused);
        }
        self.paused = false;
        Ok(())
    }

    /// Whether the pause switch is on.
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_starts_running() {
        let guard = OperationalGuard::new();
        assert!(!guard.is_paused());
        assert!(guard.ensure_not_paused().is_ok());
    }

    #[test]
    fn test_pause_unpause_cycle() {
        let mut guard = OperationalGuard::new();
        guard.pause().unwrap();
        assert!(guard.is_paused());
        assert!(matches!(guard.ensure_not_paused(), Err(Error::Paused)));
        guard.unpause().unwrap();
        assert!(!guard.is_paused());
    }

    #[test]
    fn test_double_pause_fails() {
        let mut guard = OperationalGuard::new();
        guard.pause().unwrap();
        assert!(matches!(guard.pause(), Err(Error::Paused)));
    }

    #[test]
    fn test_unpause_while_running_fails() {
        let mut guard = OperationalGuard::new();
        assert!(matches!(guard.unpause(), Err(Error::NotPaused)));
    }

    #[test]
    fn test_reentrancy_barrier() {
        let mut guard = OperationalGuard::new();
        guard.enter().unwrap();
        assert!(matches!(guard.enter(), Err(Error::ReentrantCall)));
        guard.exit();
        assert!(guard.enter().is_ok());
    }
}
