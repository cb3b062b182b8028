//! Key-value storage error types.

use thiserror::Error;

/// Storage error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("storage access denied: {0}")]
    AccessDenied(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Maps an io error, keeping permission failures distinct.
    #[must_use]
    pub fn from_io(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied(error.to_string()),
            std::io::ErrorKind::StorageFull | std::io::ErrorKind::QuotaExceeded => {
                Self::QuotaExceeded(error.to_string())
            }
            _ => Self::Io(error),
        }
    }
}
