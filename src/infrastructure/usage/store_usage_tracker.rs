//! Daily regeneration counter persisted on a key-value store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::{RegenerationQuota, UserId};
use crate::domain::errors::UsageError;
use crate::domain::ports::{KeyValueStore, UsagePort};

/// Prefix of the storage key holding a user's usage record.
pub const USAGE_KEY_PREFIX: &str = "regeneration_usage_";

/// Stored count for one UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub day: NaiveDate,
    pub count: u32,
}

/// Enforces a per-user daily regeneration limit.
///
/// A record from an earlier day counts as zero. Unreadable records are reset.
pub struct StoreUsageTracker {
    store: Arc<dyn KeyValueStore>,
    daily_limit: u32,
    update_lock: Mutex<()>,
}

impl StoreUsageTracker {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, daily_limit: u32) -> Self {
        Self {
            store,
            daily_limit,
            update_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    fn key(user_id: &UserId) -> String {
        format!("{USAGE_KEY_PREFIX}{user_id}")
    }

    fn count_on(&self, user_id: &UserId, day: NaiveDate) -> Result<u32, UsageError> {
        let Some(raw) = self.store.get(&Self::key(user_id))? else {
            return Ok(0);
        };

        match serde_json::from_str::<UsageRecord>(&raw) {
            Ok(record) if record.day == day => Ok(record.count),
            Ok(_) => Ok(0),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to parse usage record. Resetting count.");
                Ok(0)
            }
        }
    }

    /// Quota for `user_id` on `day`.
    ///
    /// # Errors
    /// Returns error if the store cannot be read.
    pub fn quota_on(&self, user_id: &UserId, day: NaiveDate) -> Result<RegenerationQuota, UsageError> {
        Ok(RegenerationQuota::new(
            self.count_on(user_id, day)?,
            self.daily_limit,
        ))
    }

    /// Counts one regeneration for `user_id` on `day`.
    ///
    /// # Errors
    /// Returns [`UsageError::LimitReached`] at the limit, or a storage error.
    pub fn record_on(&self, user_id: &UserId, day: NaiveDate) -> Result<RegenerationQuota, UsageError> {
        let _guard = self.update_lock.lock();

        let count = self.count_on(user_id, day)?;
        if count >= self.daily_limit {
            debug!(user_id = %user_id, count, limit = self.daily_limit, "Regeneration limit reached");
            return Err(UsageError::LimitReached {
                limit: self.daily_limit,
            });
        }

        let record = UsageRecord {
            day,
            count: count + 1,
        };
        self.store
            .set(&Self::key(user_id), &serde_json::to_string(&record)?)?;

        Ok(RegenerationQuota::new(record.count, self.daily_limit))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[async_trait]
impl UsagePort for StoreUsageTracker {
    async fn regeneration_quota(&self, user_id: &UserId) -> Result<RegenerationQuota, UsageError> {
        self.quota_on(user_id, today())
    }

    async fn record_regeneration(
        &self,
        user_id: &UserId,
    ) -> Result<RegenerationQuota, UsageError> {
        self.record_on(user_id, today())
    }
}
