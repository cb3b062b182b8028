//! Usage tracking port definition.

use async_trait::async_trait;

use crate::domain::entities::{RegenerationQuota, UserId};
use crate::domain::errors::UsageError;

/// Port for the per-user daily usage counter.
#[async_trait]
pub trait UsagePort: Send + Sync {
    /// Returns today's regeneration count and limit.
    async fn regeneration_quota(&self, user_id: &UserId) -> Result<RegenerationQuota, UsageError>;

    /// Counts one regeneration, failing once the daily limit is reached.
    async fn record_regeneration(&self, user_id: &UserId)
    -> Result<RegenerationQuota, UsageError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-process usage counter for testing.
    pub struct MockUsagePort {
        count: Arc<RwLock<u32>>,
        limit: u32,
    }

    impl MockUsagePort {
        pub fn new(count: u32, limit: u32) -> Self {
            Self {
                count: Arc::new(RwLock::new(count)),
                limit,
            }
        }

        pub async fn count(&self) -> u32 {
            *self.count.read().await
        }
    }

    #[async_trait]
    impl UsagePort for MockUsagePort {
        async fn regeneration_quota(
            &self,
            _user_id: &UserId,
        ) -> Result<RegenerationQuota, UsageError> {
            Ok(RegenerationQuota::new(*self.count.read().await, self.limit))
        }

        async fn record_regeneration(
            &self,
            _user_id: &UserId,
        ) -> Result<RegenerationQuota, UsageError> {
            let mut count = self.count.write().await;
            if *count >= self.limit {
                return Err(UsageError::LimitReached { limit: self.limit });
            }
            *count += 1;
            Ok(RegenerationQuota::new(*count, self.limit))
        }
    }
}
