//! Browser binding for server-rendered roadmap pages.
//!
//! The HTML produced by `roadmap-renderer` carries everything the browser
//! side needs as data attributes:
//!
//! - `body[data-page]`: page path, selects the `localStorage` namespace
//! - `[data-section-index]`: section anchors observed for visibility
//! - `[data-nav-index]`: side navigation items, highlighted and clickable
//! - `[data-toggle-index]`: "understood" toggles
//!
//! [`mount`] wires these to a [`SideNavigation`] driven by window scroll
//! events (debounced through `setTimeout`) and an `IntersectionObserver`,
//! and persists toggles through [`LocalStorage`]. Dropping the returned
//! [`RoadmapPage`] removes every listener.
//!
//! Pages load the bundle through `assets/roadmap.js`, a module script that
//! runs the wasm-bindgen `init()` and then `mount()`. Build it into that
//! directory with `wasm-pack build --target web`.
//!
//! [`SideNavigation`]: roadmap_navigation::SideNavigation

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

mod binding;
mod dom;
mod storage;
mod viewport;

use wasm_bindgen::prelude::*;

pub use binding::PageBinding;
pub use storage::LocalStorage;
pub use viewport::DomViewport;

/// Handle to a mounted page, exported to JavaScript.
///
/// Call `free()` (or let it be garbage collected) to unmount.
#[wasm_bindgen]
pub struct RoadmapPage {
    binding: Option<PageBinding>,
}

#[wasm_bindgen]
impl RoadmapPage {
    /// Index of the highlighted section, if any.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.binding.as_ref().and_then(PageBinding::active)
    }

    /// Detach all listeners now rather than on `free()`.
    pub fn unmount(&mut self) {
        self.binding.take();
    }
}

/// Bind the current document.
///
/// # Errors
///
/// Returns the JS exception if the window or document is unavailable or a
/// listener can't be installed.
#[wasm_bindgen]
pub fn mount() -> Result<RoadmapPage, JsValue> {
    let binding = PageBinding::mount()?;
    Ok(RoadmapPage {
        binding: Some(binding),
    })
}
