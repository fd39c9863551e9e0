//! Key-value persistence for roadmap page state.
//!
//! Page state (which sections the reader has marked as understood) lives in a
//! small string key-value store, the same shape as the browser's
//! `localStorage`. The store is a capability passed explicitly to whoever
//! needs it, never a global.
//!
//! - [`KeyValueStore`]: the capability trait
//! - [`FsStore`]: one JSON file per namespace, used by the server
//! - [`MemoryStore`]: in-memory store for tests and static export
//! - [`HiddenSections`]: the typed `hiddenSections` boolean array
//!
//! The browser implementation over `window.localStorage` lives in
//! `roadmap-web`.
//!
//! # Example
//!
//! ```
//! use roadmap_storage::{HiddenSections, MemoryStore};
//!
//! let store = MemoryStore::new();
//! HiddenSections::toggle_and_save(&store, 1).unwrap();
//!
//! let hidden = HiddenSections::load(&store);
//! assert!(hidden.is_hidden(1));
//! assert!(!hidden.is_hidden(0));
//! ```

mod fs;
mod hidden;
mod memory;
mod store;

pub use fs::FsStore;
pub use hidden::{HIDDEN_SECTIONS_KEY, HiddenSections, page_namespace};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StorageError, StorageErrorKind};
