//! Application state.
//!
//! Shared state for all request handlers.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use roadmap_site::{Page, Site};
use roadmap_storage::{FsStore, KeyValueStore};

/// Per-page reader state store.
pub(crate) type PageStore = Box<dyn KeyValueStore + Send + Sync>;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Loaded pages.
    pub(crate) site: Arc<Site>,
    /// Hidden-sections stores keyed by page path.
    pub(crate) stores: HashMap<String, PageStore>,
    /// Application version (part of the `ETag`).
    pub(crate) version: String,
}

impl AppState {
    /// State with one file store per page under `state_dir`.
    pub(crate) fn with_fs_stores(site: Arc<Site>, state_dir: &Path, version: String) -> Self {
        let stores = site
            .pages()
            .iter()
            .map(|page| {
                let store: PageStore = Box::new(FsStore::in_dir(state_dir, &page.info.namespace()));
                (page.info.path.clone(), store)
            })
            .collect();
        Self {
            site,
            stores,
            version,
        }
    }

    /// Page addressed by an API slug: its storage namespace (`index` for `/`).
    pub(crate) fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.site
            .pages()
            .iter()
            .find(|page| page.info.namespace() == slug)
    }

    /// Store for a registered page path.
    pub(crate) fn store(&self, path: &str) -> Option<&dyn KeyValueStore> {
        self.stores.get(path).map(|s| s.as_ref() as &dyn KeyValueStore)
    }
}
