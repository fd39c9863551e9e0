//! In-memory store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::store::{KeyValueStore, StorageError};

/// In-memory key-value store.
///
/// Used by tests and by static export, where no state is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<&str>) -> String,
    ) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap();
        let value = f(entries.get(key).map(String::as_str));
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_update_sees_current_value() {
        let store = MemoryStore::new().with_entry("count", "1");

        store
            .update("count", &mut |current| {
                assert_eq!(current, Some("1"));
                "2".to_owned()
            })
            .unwrap();
        store
            .update("fresh", &mut |current| {
                assert_eq!(current, None);
                "x".to_owned()
            })
            .unwrap();

        assert_eq!(store.get("count").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("fresh").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_with_entry() {
        let store = MemoryStore::new().with_entry("hiddenSections", "[true]");
        assert_eq!(
            store.get("hiddenSections").unwrap().as_deref(),
            Some("[true]")
        );
    }
}
