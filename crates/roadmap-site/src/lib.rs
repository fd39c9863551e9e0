//! Page registry and page composition for the roadmap site.
//!
//! This crate provides:
//! - [`Site`]: the ordered page registry, loaded from configuration
//! - [`Site::render`]: full HTML documents for one page
//! - [`Site::navigation`]: top-level links in configured order
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use roadmap_config::Config;
//! use roadmap_site::Site;
//! use roadmap_storage::FsStore;
//!
//! let config = Config::load(None, None)?;
//! let site = Site::load(&config)?;
//!
//! let store = FsStore::in_dir(&config.content_resolved.state_dir, "node-fundamentals");
//! let page = site.render("/node-fundamentals", &store)?;
//! println!("{}", page.html);
//! # Ok(())
//! # }
//! ```

mod document;
mod page;
mod site;

pub use page::{Page, PageContent, PageInfo, PageKind};
pub use site::{NavLink, RenderedPage, SectionSummary, Site, SiteError};
