//! Key-value storage port definition.

use crate::domain::errors::StorageError;

/// Small string store addressed by key.
///
/// Implementations may back onto browser-style local storage, files or
/// memory; callers only rely on get/set/remove.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored at `key`.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns error on quota or access failures.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value at `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns error if the backing store rejects the deletion.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Checks if a value exists at `key`.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
