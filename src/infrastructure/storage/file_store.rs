//! File-backed key-value store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

const ENTRY_EXTENSION: &str = "json";

/// Stores each key in its own file under a directory.
///
/// File names are the hex SHA-256 of the key, so any key is filesystem-safe.
/// Writes go through a temporary file and an atomic rename.
pub struct FileKeyValueStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Opens a store in `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            info!(path = %dir.display(), "Creating storage directory");
            fs::create_dir_all(&dir).map_err(StorageError::from_io)?;
        }
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir
            .join(format!("{}.{ENTRY_EXTENSION}", hex::encode(digest)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read(self.entry_path(key)) {
            // Undecodable bytes are handed back as text so callers see a
            // malformed value instead of a read failure.
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => Ok(Some(content)),
                Err(e) => {
                    warn!(key, "Entry is not valid UTF-8");
                    Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::from_io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let path = self.entry_path(key);

        let mut temp_file =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(StorageError::from_io)?;
        temp_file
            .write_all(value.as_bytes())
            .map_err(StorageError::from_io)?;
        temp_file
            .persist(&path)
            .map_err(|e| StorageError::from_io(e.error))?;

        debug!(path = %path.display(), bytes = value.len(), "Stored entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_io(e)),
        }
    }
}
