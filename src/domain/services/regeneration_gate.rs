//! Confirmation gate in front of the counted regeneration action.
//!
//! ```text
//! Closed --open--> Open(Idle) --confirm--> Open(Confirming) --settle--> Closed
//!                  Open(Idle) --close----> Closed
//! ```
//!
//! The gate only shows quota figures supplied by the usage collaborator; it
//! never enforces or persists the limit.

use thiserror::Error;
use tracing::debug;

use crate::domain::entities::RegenerationQuota;

/// Phase of an open gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Waiting for the user to confirm or cancel.
    Idle,
    /// Confirmed; the external operation is in flight.
    Confirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Closed,
    Open {
        quota: RegenerationQuota,
        phase: GatePhase,
    },
}

/// Invalid gate transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("regeneration dialog is not open")]
    NotOpen,

    #[error("regeneration is already in progress")]
    Busy,

    #[error("no regeneration is in progress")]
    NotConfirming,
}

/// Decision the gate hands back to the usage collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Default)]
pub struct RegenerationGate {
    state: GateState,
}

impl RegenerationGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, GateState::Open { .. })
    }

    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        matches!(
            self.state,
            GateState::Open {
                phase: GatePhase::Confirming,
                ..
            }
        )
    }

    /// Whether the cancel control is enabled.
    #[must_use]
    pub const fn can_close(&self) -> bool {
        matches!(
            self.state,
            GateState::Open {
                phase: GatePhase::Idle,
                ..
            }
        )
    }

    /// Quota shown by the open gate.
    #[must_use]
    pub const fn quota(&self) -> Option<RegenerationQuota> {
        match self.state {
            GateState::Open { quota, .. } => Some(quota),
            GateState::Closed => None,
        }
    }

    /// Remaining count to display; `None` when closed or nothing remains.
    #[must_use]
    pub fn remaining_display(&self) -> Option<u32> {
        self.quota().and_then(RegenerationQuota::remaining_display)
    }

    /// Opens the gate with the given quota. An idle open gate takes the new figures.
    ///
    /// # Errors
    /// Returns [`GateError::Busy`] while a confirmed operation is in flight.
    pub fn open(&mut self, quota: RegenerationQuota) -> Result<(), GateError> {
        if self.is_confirming() {
            return Err(GateError::Busy);
        }
        debug!(
            current = quota.current_count,
            limit = quota.limit,
            "Opening regeneration dialog"
        );
        self.state = GateState::Open {
            quota,
            phase: GatePhase::Idle,
        };
        Ok(())
    }

    /// Records the user's confirmation.
    ///
    /// # Errors
    /// Returns error if the gate is closed or already confirming.
    pub fn confirm(&mut self) -> Result<GateDecision, GateError> {
        match self.state {
            GateState::Closed => Err(GateError::NotOpen),
            GateState::Open {
                phase: GatePhase::Confirming,
                ..
            } => Err(GateError::Busy),
            GateState::Open {
                quota,
                phase: GatePhase::Idle,
            } => {
                self.state = GateState::Open {
                    quota,
                    phase: GatePhase::Confirming,
                };
                Ok(GateDecision::Confirmed)
            }
        }
    }

    /// Closes the gate without confirming. Closing a closed gate is a no-op.
    ///
    /// # Errors
    /// Returns [`GateError::Busy`] while confirming.
    pub fn close(&mut self) -> Result<GateDecision, GateError> {
        if self.is_confirming() {
            return Err(GateError::Busy);
        }
        self.state = GateState::Closed;
        Ok(GateDecision::Cancelled)
    }

    /// Closes the gate once the external operation has finished, either way.
    ///
    /// # Errors
    /// Returns [`GateError::NotConfirming`] if nothing was confirmed.
    pub fn settle(&mut self) -> Result<(), GateError> {
        if !self.is_confirming() {
            return Err(GateError::NotConfirming);
        }
        self.state = GateState::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota(current: u32, limit: u32) -> RegenerationQuota {
        RegenerationQuota::new(current, limit)
    }

    #[test]
    fn test_full_confirm_flow() {
        let mut gate = RegenerationGate::new();
        assert_eq!(gate.state(), GateState::Closed);

        gate.open(quota(1, 3)).unwrap();
        assert!(gate.is_open());
        assert!(gate.can_close());
        assert_eq!(gate.remaining_display(), Some(2));

        assert_eq!(gate.confirm().unwrap(), GateDecision::Confirmed);
        assert!(gate.is_confirming());
        assert!(!gate.can_close());

        gate.settle().unwrap();
        assert_eq!(gate.state(), GateState::Closed);
    }

    #[test]
    fn test_cancel_from_idle() {
        let mut gate = RegenerationGate::new();
        gate.open(quota(0, 3)).unwrap();

        assert_eq!(gate.close().unwrap(), GateDecision::Cancelled);
        assert!(!gate.is_open());
    }

    #[test]
    fn test_close_disabled_while_confirming() {
        let mut gate = RegenerationGate::new();
        gate.open(quota(0, 3)).unwrap();
        gate.confirm().unwrap();

        assert_eq!(gate.close(), Err(GateError::Busy));
        assert!(gate.is_confirming());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut gate = RegenerationGate::new();
        assert_eq!(gate.confirm(), Err(GateError::NotOpen));
        assert_eq!(gate.settle(), Err(GateError::NotConfirming));

        gate.open(quota(0, 3)).unwrap();
        assert_eq!(gate.settle(), Err(GateError::NotConfirming));

        gate.confirm().unwrap();
        assert_eq!(gate.confirm(), Err(GateError::Busy));
        assert_eq!(gate.open(quota(1, 3)), Err(GateError::Busy));
    }

    #[test]
    fn test_reopen_refreshes_quota() {
        let mut gate = RegenerationGate::new();
        gate.open(quota(0, 3)).unwrap();
        gate.open(quota(2, 3)).unwrap();
        assert_eq!(gate.quota(), Some(quota(2, 3)));
    }

    #[test]
    fn test_remaining_suppressed_at_limit() {
        let mut gate = RegenerationGate::new();
        gate.open(quota(3, 3)).unwrap();
        assert_eq!(gate.remaining_display(), None);
        assert_eq!(gate.quota().unwrap().current_count, 3);
    }
}
