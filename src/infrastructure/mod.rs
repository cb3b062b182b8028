//! Infrastructure layer with external service adapters.

/// Generative AI client.
pub mod ai;
/// Application configuration.
pub mod config;
/// Key-value store adapters.
pub mod storage;
/// Regeneration usage tracking.
pub mod usage;

pub use ai::GeminiClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
pub use usage::StoreUsageTracker;
