//! Per-section "understood" state.

use crate::store::{KeyValueStore, StorageError};

/// Store key holding the hidden-sections array.
pub const HIDDEN_SECTIONS_KEY: &str = "hiddenSections";

/// Storage namespace for the page at URL `path`.
///
/// Hidden-section state is kept per page: `/` maps to `index`, other paths
/// drop their slashes at the ends and join inner segments with `__`.
///
/// # Examples
///
/// ```
/// use roadmap_storage::page_namespace;
///
/// assert_eq!(page_namespace("/"), "index");
/// assert_eq!(page_namespace("/node-fundamentals"), "node-fundamentals");
/// assert_eq!(page_namespace("/guides/react/"), "guides__react");
/// ```
#[must_use]
pub fn page_namespace(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "index".to_owned()
    } else {
        trimmed.replace('/', "__")
    }
}

/// Which sections the reader has collapsed as understood, by section index.
///
/// Persisted as a JSON boolean array. `null` entries (holes left by sparse
/// arrays) and indices past the end read as visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenSections {
    flags: Vec<bool>,
}

impl HiddenSections {
    /// Build from explicit flags.
    #[must_use]
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Load from `store`.
    ///
    /// Read failures and undecodable values are logged and read as "nothing
    /// hidden": page state must never keep a page from rendering.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(HIDDEN_SECTIONS_KEY) {
            Ok(raw) => Self::decode(raw.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read hidden sections");
                Self::default()
            }
        }
    }

    fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<Option<bool>>>(raw) {
            Ok(flags) => Self {
                flags: flags.into_iter().map(Option::unwrap_or_default).collect(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring corrupt hidden sections value");
                Self::default()
            }
        }
    }

    fn encode(&self) -> String {
        // Vec<bool> always serializes.
        serde_json::to_string(&self.flags).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Persist to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store rejects the write.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(HIDDEN_SECTIONS_KEY, &self.encode())
    }

    /// Whether section `index` is hidden.
    #[must_use]
    pub fn is_hidden(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Set section `index`, growing the array with `false` as needed.
    pub fn set(&mut self, index: usize, hidden: bool) {
        if self.flags.len() <= index {
            self.flags.resize(index + 1, false);
        }
        self.flags[index] = hidden;
    }

    /// Flip section `index`. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        let hidden = !self.is_hidden(index);
        self.set(index, hidden);
        hidden
    }

    /// Flip section `index` in `store` as one [`KeyValueStore::update`].
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read or rejects the
    /// write.
    pub fn toggle_and_save(store: &dyn KeyValueStore, index: usize) -> Result<bool, StorageError> {
        let mut state = false;
        store.update(HIDDEN_SECTIONS_KEY, &mut |raw| {
            let mut hidden = Self::decode(raw);
            state = hidden.toggle(index);
            hidden.encode()
        })?;
        tracing::info!(index, hidden = state, "Toggled section");
        Ok(state)
    }

    /// The raw flags.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}
