//! HTML renderers for roadmap content.
//!
//! Rendering is structural recursion over the content records:
//!
//! ```text
//! render_content ──► render_block ──► render_sub_block ──► render_tool
//!                         │                  │
//!                         └─► render_code_panel ◄─┘
//! ```
//!
//! Every renderer is a pure function of its inputs that appends to a
//! `String`. Nothing here fails: absent or empty optional fields produce no
//! output, unknown `meta` tags fall back to the neutral presentation.
//!
//! Class names follow the site's Tailwind vocabulary; icons are emitted as
//! Material Symbols ligature spans. Neither is interpreted here.
//!
//! # Example
//!
//! ```
//! use roadmap_content::Section;
//! use roadmap_navigation::AnchorRegistry;
//! use roadmap_renderer::render_content;
//! use roadmap_storage::HiddenSections;
//!
//! let sections = vec![Section {
//!     title: "Event Loop".to_owned(),
//!     ..Default::default()
//! }];
//! let anchors = AnchorRegistry::new();
//! let html = render_content(&sections, &anchors, &HiddenSections::default());
//!
//! assert!(html.contains("No data available..."));
//! assert_eq!(anchors.get(0).as_deref(), Some("section-0"));
//! ```

mod aside;
mod block;
mod content;
mod goals;
mod leaf;
mod presentation;
mod util;

pub use aside::render_aside;
pub use block::{MAX_COLUMNS, column_count, render_block};
pub use content::{
    ContentRenderer, EMPTY_SECTION_PLACEHOLDER, render_content, render_toggle_label,
    section_anchor_id,
};
pub use goals::render_goals;
pub use leaf::{DEFAULT_LANGUAGE, render_code_panel, render_sub_block, render_tool};
pub use presentation::{Presentation, Tone};
pub use util::{escape_html, render_paragraphs};
