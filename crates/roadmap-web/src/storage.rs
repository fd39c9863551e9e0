//! [`KeyValueStore`] over `window.localStorage`.

use roadmap_storage::{KeyValueStore, StorageError, StorageErrorKind, page_namespace};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

const BACKEND: &str = "LocalStorage";

/// `localStorage` scoped to one page.
///
/// Keys are prefixed with the page namespace so every page keeps its own
/// `hiddenSections` array under one origin.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
    prefix: String,
}

impl LocalStorage {
    /// Open the window's `localStorage` for the page at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::Unavailable`] if storage is disabled
    /// (private browsing, sandboxed frames).
    pub fn for_page(window: &Window, path: &str) -> Result<Self, StorageError> {
        let storage = window
            .local_storage()
            .map_err(|e| unavailable(&e))?
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::Unavailable)
                    .with_backend(BACKEND)
                    .with_message("localStorage is disabled")
            })?;
        Ok(Self {
            storage,
            prefix: scoped_prefix(path),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(&self.key(key))
            .map_err(|e| unavailable(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(&self.key(key), value)
            .map_err(|e| unavailable(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(&self.key(key))
            .map_err(|e| unavailable(&e))
    }
}

fn scoped_prefix(path: &str) -> String {
    format!("{}:", page_namespace(path))
}

fn unavailable(err: &JsValue) -> StorageError {
    let message = err
        .as_string()
        .or_else(|| js_sys::JSON::stringify(err).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "storage call failed".to_owned());
    StorageError::new(StorageErrorKind::Unavailable)
        .with_backend(BACKEND)
        .with_message(message)
}
