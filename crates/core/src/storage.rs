//! Durable key/value storage for small JSON documents
//!
//! Mirrors what a browser's local storage gives the site: string values
//! under string keys. Two backends are provided:
//! - [`MemoryStorage`] for tests and ephemeral sessions
//! - [`FileStorage`], one `<key>.json` file per key in a directory
//!
//! [`load_json`] and [`save_json`] layer typed access on top. Reads are
//! forgiving: a missing or corrupt document loads as `None` and is logged.
//!
//! # Example
//!
//! ```
//! use cafe_core::storage::{load_json, save_json, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! save_json(&storage, "cart", &vec![1, 2, 3])?;
//! let back: Option<Vec<u32>> = load_json(&storage, "cart");
//! assert_eq!(back, Some(vec![1, 2, 3]));
//! # Ok::<(), cafe_core::Error>(())
//! ```

use crate::error::{Error, ErrorCode, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// String storage keyed by name.
pub trait Storage: Send + Sync {
    /// Raw value under `key`, if present.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Returns true if something was removed.
    fn remove(&self, key: &str) -> Result<bool>;
}

fn lock_poisoned() -> Error {
    Error::new(ErrorCode::Internal, "Storage lock poisoned")
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self.entries.read().map_err(|_| lock_poisoned())?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self.entries.write().map_err(|_| lock_poisoned())?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut guard = self.entries.write().map_err(|_| lock_poisoned())?;
        Ok(guard.remove(key).is_some())
    }
}

/// Directory-backed storage, one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) the storage directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::from(e).with_context(format!("Creating storage directory {}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    /// Storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !valid {
            return Err(Error::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::from(e).with_context(format!("Reading {}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Temp file then rename
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, path = %path.display(), "Stored document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Loads and deserializes `key`.
///
/// Missing keys, read failures and corrupt JSON all yield `None`; the last
/// two are logged at `warn`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored document");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Discarding corrupt stored document");
            None
        }
    }
}

/// Serializes `value` and stores it under `key`.
pub fn save_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| Error::storage(format!("Failed to serialize {key}: {e}")))?;
    storage.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart").unwrap(), None);

        storage.set("cart", "[]").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));

        assert!(storage.remove("cart").unwrap());
        assert!(!storage.remove("cart").unwrap());
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let first = FileStorage::open(dir.path().join("nested")).unwrap();
        save_json(&first, "flavor-explorer.notes", &["Nutty", "Smoky"]).unwrap();

        let second = FileStorage::open(dir.path().join("nested")).unwrap();
        let notes: Option<Vec<String>> = load_json(&second, "flavor-explorer.notes");
        assert_eq!(notes, Some(vec!["Nutty".to_string(), "Smoky".to_string()]));
        assert!(dir.path().join("nested/flavor-explorer.notes.json").exists());
    }

    #[test]
    fn test_file_storage_missing_key() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get("cart").unwrap(), None);
        assert!(!storage.remove("cart").unwrap());
    }

    #[test]
    fn test_file_storage_rejects_bad_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        for key in ["", "../escape", ".hidden", "a/b", "spaces here"] {
            let err = storage.set(key, "1").unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidKey, "key {key:?}");
        }
    }

    #[test]
    fn test_corrupt_document_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.set("cart", "{not json").unwrap();
        let cart: Option<Vec<u32>> = load_json(&storage, "cart");
        assert!(cart.is_none());

        storage.set("cart", r#"{"qty": 1}"#).unwrap();
        let cart: Option<Vec<u32>> = load_json(&storage, "cart");
        assert!(cart.is_none());
    }
}
