//! Preference Storage Module
//!
//! Per-key JSON files under the platform local-data directory. The client
//! keeps a single entry here: the persisted team id.

use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Key-value preference store backed by one file per key.
pub struct PrefStore {
    storage_path: PathBuf,
}

impl PrefStore {
    /// Create a store in the platform-standard location.
    pub fn new() -> Self {
        let storage_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("CTFTracker");

        Self::at(storage_path)
    }

    /// Create a store rooted at an explicit directory.
    pub fn at(storage_path: PathBuf) -> Self {
        if let Err(e) = std::fs::create_dir_all(&storage_path) {
            error!("Failed to create storage directory: {}", e);
        }

        debug!("Preference store at: {:?}", storage_path);

        Self { storage_path }
    }

    /// Persist a value under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        std::fs::write(self.entry_path(key), json).map_err(|e| StorageError::Io(e.to_string()))?;

        info!("Saved preference: {}", key);
        Ok(())
    }

    /// Read the value stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let json = std::fs::read_to_string(self.entry_path(key))
            .map_err(|e| StorageError::Io(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Remove the entry for `key`, if any.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);

        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| StorageError::Io(e.to_string()))?;
            info!("Removed preference: {}", key);
        }

        Ok(())
    }

    /// Check if an entry exists for `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.entry_path(key).exists()
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.storage_path.join(format!("{}.json", key))
    }
}

impl Default for PrefStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().to_path_buf());

        store.save("teamID", &42i64).unwrap();
        assert!(store.exists("teamID"));
        assert_eq!(store.load::<i64>("teamID").unwrap(), 42);

        store.delete("teamID").unwrap();
        assert!(!store.exists("teamID"));
        assert!(store.load::<i64>("teamID").is_err());
    }

    #[test]
    fn delete_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().to_path_buf());

        assert!(store.delete("teamID").is_ok());
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::at(dir.path().to_path_buf());

        store.save("teamID", &1i64).unwrap();
        store.save("teamID", &2i64).unwrap();
        assert_eq!(store.load::<i64>("teamID").unwrap(), 2);
    }
}
