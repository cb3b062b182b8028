//! Usage tracking adapters.

mod store_usage_tracker;

pub use store_usage_tracker::{StoreUsageTracker, USAGE_KEY_PREFIX, UsageRecord};
