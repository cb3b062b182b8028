//! Daily regeneration quota.

use serde::{Deserialize, Serialize};

/// Regeneration count for one user on one calendar day.
///
/// Informational only: the limit is enforced by the usage collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerationQuota {
    pub current_count: u32,
    pub limit: u32,
}

impl RegenerationQuota {
    #[must_use]
    pub const fn new(current_count: u32, limit: u32) -> Self {
        Self {
            current_count,
            limit,
        }
    }

    /// Returns `limit - current_count`, which is negative once the limit is exceeded.
    #[must_use]
    pub fn remaining(self) -> i64 {
        i64::from(self.limit) - i64::from(self.current_count)
    }

    /// Remaining count to show, or `None` when nothing remains.
    #[must_use]
    pub fn remaining_display(self) -> Option<u32> {
        u32::try_from(self.remaining()).ok().filter(|r| *r > 0)
    }

    #[must_use]
    pub fn is_exhausted(self) -> bool {
        self.remaining() <= 0
    }
}
