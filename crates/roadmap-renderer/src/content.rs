//! Section list renderer.

use std::fmt::Write;

use roadmap_content::Section;
use roadmap_navigation::AnchorRegistry;
use roadmap_storage::HiddenSections;

use crate::block::render_block;
use crate::util::{escape_html, icon};

/// Block container content for a section without blocks.
pub const EMPTY_SECTION_PLACEHOLDER: &str = "<p>No data available...</p>";

/// DOM id of section `index`.
#[must_use]
pub fn section_anchor_id(index: usize) -> String {
    format!("section-{index}")
}

/// Renders a page's sections and publishes their anchors.
///
/// The anchor registry is shared with the page's side navigation: each
/// render registers `section-{i}` for every section and drops entries past
/// the new section count.
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    anchors: AnchorRegistry<String>,
}

impl ContentRenderer {
    /// Create a renderer writing anchors into `anchors`.
    #[must_use]
    pub fn new(anchors: AnchorRegistry<String>) -> Self {
        Self { anchors }
    }

    /// The shared anchor registry.
    #[must_use]
    pub fn anchors(&self) -> &AnchorRegistry<String> {
        &self.anchors
    }

    /// Render all sections. Sections marked hidden keep their header and
    /// toggle but omit their blocks.
    #[must_use]
    pub fn render(&self, sections: &[Section], hidden: &HiddenSections) -> String {
        let mut out = String::new();
        out.push_str(r#"<div class="content flex flex-col gap-10 relative">"#);
        for (index, section) in sections.iter().enumerate() {
            self.anchors.register(index, section_anchor_id(index));
            render_section(index, section, hidden.is_hidden(index), &mut out);
        }
        self.anchors.truncate(sections.len());
        out.push_str("</div>");
        out
    }
}

/// Render `sections` once against `anchors`.
///
/// Shorthand for [`ContentRenderer::new`] followed by
/// [`ContentRenderer::render`].
#[must_use]
pub fn render_content(
    sections: &[Section],
    anchors: &AnchorRegistry<String>,
    hidden: &HiddenSections,
) -> String {
    ContentRenderer::new(anchors.clone()).render(sections, hidden)
}

fn render_section(index: usize, section: &Section, hidden: bool, out: &mut String) {
    write!(
        out,
        r#"<div id="{id}" class="section" data-section-index="{index}">"#,
        id = section_anchor_id(index)
    )
    .unwrap();

    out.push_str(
        r#"<header class="bg-neutral-base flex flex-col lg:flex-row lg:justify-between items-start lg:items-end gap-4 py-4 lg:-ml-6 lg:p-4 sticky top-0 z-10">"#,
    );
    out.push_str(r#"<div class="lg:pl-4"><h1 class="text-2xl text-primary cursor-pointer">"#);
    out.push_str(&escape_html(&section.title));
    out.push_str(r#"</h1><p class="text-white/50 text-sm">"#);
    out.push_str(&escape_html(&section.description));
    out.push_str("</p></div>");
    render_toggle(index, hidden, out);
    out.push_str("</header>");

    if !hidden {
        out.push_str(r#"<div class="blocks flex flex-col gap-8 lg:gap-4 transition">"#);
        if section.blocks.is_empty() {
            out.push_str(EMPTY_SECTION_PLACEHOLDER);
        } else {
            for block in &section.blocks {
                render_block(block, out);
            }
        }
        out.push_str("</div>");
    }

    out.push_str("</div>");
}

fn render_toggle(index: usize, hidden: bool, out: &mut String) {
    write!(
        out,
        r#"<button type="button" class="understand-toggle flex gap-2 items-center text-xs px-2 py-1 rounded bg-neutral-light" data-toggle-index="{index}" aria-pressed="{hidden}">"#
    )
    .unwrap();
    render_toggle_label(hidden, out);
    out.push_str("</button>");
}

/// Inner HTML of a section's "understood" toggle.
///
/// Shared with the browser binding, which swaps the label in place after a
/// toggle.
pub fn render_toggle_label(hidden: bool, out: &mut String) {
    if hidden {
        icon("check", "text-context-success-base", out);
        out.push_str("Understood");
    } else {
        out.push_str("Understand");
    }
}
