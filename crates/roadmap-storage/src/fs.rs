//! Filesystem store.
//!
//! Each store is a single JSON object file mapping keys to string values.
//! Writes go to a sibling temp file first and are renamed into place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::store::{KeyValueStore, StorageError, StorageErrorKind};

const BACKEND: &str = "Fs";

/// Key-value store backed by one JSON file.
///
/// The file is created on first write; a missing file reads as empty.
#[derive(Debug)]
pub struct FsStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl FsStore {
    /// Create a store over `path`. Nothing is touched until the first access.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Create a store for `namespace` inside `dir` (`{dir}/{namespace}.json`).
    #[must_use]
    pub fn in_dir(dir: &Path, namespace: &str) -> Self {
        Self::new(dir.join(format!("{namespace}.json")))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::io(e, Some(self.path.clone())).with_backend(BACKEND));
            }
        };
        serde_json::from_str(&text).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt)
                .with_backend(BACKEND)
                .with_path(&self.path)
                .with_source(e)
        })
    }

    fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |e: std::io::Error| {
            StorageError::io(e, Some(self.path.clone())).with_backend(BACKEND)
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            StorageError::new(StorageErrorKind::Other)
                .with_backend(BACKEND)
                .with_source(e)
        })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Saved state");
        Ok(())
    }
}

impl KeyValueStore for FsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.store(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<&str>) -> String,
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.load()?;
        let value = f(entries.get(key).map(String::as_str));
        entries.insert(key.to_owned(), value);
        self.store(&entries)
    }
}
