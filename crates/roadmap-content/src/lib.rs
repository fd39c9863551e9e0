//! Content schema and loading for the roadmap site.
//!
//! Topic pages are modeled as nested plain data:
//!
//! ```text
//! Section ──► Block ──► SubBlock ──► Tool
//! ```
//!
//! The career goals page uses the flat [`Goal`] record instead.
//!
//! All types deserialize from the JSON-compatible shape used by the content
//! files (`subBlocks`, `codeSample`, ...). Nothing is validated at load time:
//! a missing `title` becomes an empty string and renders as empty text.
//! [`lint_sections`] reports such entries without rejecting them.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), roadmap_content::ContentError> {
//! use std::path::Path;
//!
//! let sections = roadmap_content::load_sections(Path::new("content/node-fundamentals.json"))?;
//! for section in &sections {
//!     println!("{} ({} blocks)", section.title, section.blocks.len());
//! }
//! # Ok(())
//! # }
//! ```

mod goal;
mod loader;
mod meta;
mod schema;

pub use goal::{Goal, GoalValue};
pub use loader::{ContentError, ContentFormat, load_goals, load_sections, parse_goals, parse_sections};
pub use meta::Meta;
pub use schema::{Block, ContentWarning, Section, SubBlock, Tool, lint_sections};
