//! Usage tracking error types.

use thiserror::Error;

use super::StorageError;

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("daily regeneration limit of {limit} reached")]
    LimitReached { limit: u32 },

    #[error("failed to encode usage record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("usage storage error: {0}")]
    Storage(#[from] StorageError),
}
