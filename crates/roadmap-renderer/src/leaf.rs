//! Sub-block, code panel and tool chip renderers.

use roadmap_content::{Meta, SubBlock, Tool};

use crate::util::{escape_html, icon, present, render_paragraphs};

/// Code language used when a block does not name one.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Render one sub-block.
///
/// `meta` is the parent block's tag; sub-blocks are styled by their block,
/// not by their own `meta` field.
pub fn render_sub_block(sub: &SubBlock, meta: Option<&Meta>, out: &mut String) {
    let tools = sub.tools.as_deref().filter(|t| !t.is_empty());
    let is_notes = meta == Some(&Meta::Notes);

    out.push_str(r#"<div class=""#);
    out.push_str(&sub_block_classes(meta, sub.is_tip()));
    out.push_str(r#"">"#);
    if is_notes {
        icon("stylus_note", "", out);
    }
    out.push_str(r#"<div><header class="mb-4 flex justify-between"><h1 class=""#);
    out.push_str(&header_classes(meta, sub.is_tip()));
    out.push_str(r#"">"#);
    out.push_str(&escape_html(&sub.title));
    out.push_str("</h1>");
    if tools.is_some() {
        icon("handyman", "text-context-tool-base", out);
    }
    out.push_str(r#"</header><main class="text-xs flex flex-col gap-4">"#);

    if let Some(description) = present(sub.description.as_ref()) {
        out.push_str(r#"<p class="description">"#);
        render_paragraphs(description, out);
        out.push_str("</p>");
    }
    if let Some(sample) = present(sub.code_sample.as_ref()) {
        render_code_panel(sample, None, out);
    }
    if let Some(notes) = present(sub.notes.as_ref()) {
        out.push_str(
            r#"<div class="notes bg-context-warning-base text-context-warning-dark font-signature p-2 rounded text-xs flex gap-4 items-center">"#,
        );
        icon("stylus_note", "", out);
        out.push_str(&escape_html(notes));
        out.push_str("</div>");
    }
    if let Some(tools) = tools {
        out.push_str(r#"<div class="tools flex gap-2">"#);
        for tool in tools {
            render_tool(tool, out);
        }
        out.push_str("</div>");
    }

    out.push_str("</main></div></div>");
}

/// Render an inline code sample as a preformatted panel.
///
/// The text is escaped, not highlighted; the `language-*` class is left for
/// a client-side highlighter.
pub fn render_code_panel(sample: &str, language: Option<&str>, out: &mut String) {
    let language = language.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LANGUAGE);
    out.push_str(
        r#"<div class="code-panel flex items-center overflow"><div class="w-full relative"><pre class="rounded-xl text-sm shadow-inner"><code class="language-"#,
    );
    out.push_str(&escape_html(language));
    out.push_str(r#"">"#);
    out.push_str(&escape_html(sample));
    out.push_str("</code></pre></div></div>");
}

/// Render one tool chip.
pub fn render_tool(tool: &Tool, out: &mut String) {
    out.push_str(
        r#"<div class="tool bg-context-tool-base text-context-tool-dark font-bold px-2 py-1 rounded text-xs">"#,
    );
    out.push_str(&escape_html(&tool.tool));
    out.push_str("</div>");
}

fn sub_block_classes(meta: Option<&Meta>, tip: bool) -> String {
    let mut classes = String::from("sub-block bg-neutral-base p-4 rounded transition");
    if meta == Some(&Meta::Scenarios) {
        classes.push_str(" !bg-context-info text-neutral-base");
    }
    if meta.is_some_and(Meta::is_success) || tip {
        classes.push_str(" !bg-context-success-base text-context-success-dark");
    }
    if meta.is_some_and(Meta::is_failure) {
        classes.push_str(" !bg-context-failure-base text-context-failure-dark");
    }
    if meta == Some(&Meta::Notes) {
        classes.push_str(" !bg-context-warning-base text-context-warning-dark italic font-signature");
    }
    classes
}

fn header_classes(meta: Option<&Meta>, tip: bool) -> String {
    let mut classes = String::from("font-bold text-lg text-neutral-lighter");
    // Solution and problem headers keep the neutral colour.
    if meta == Some(&Meta::Positive) || tip {
        classes.push_str(" !text-context-success-dark");
    }
    if meta == Some(&Meta::Negative) {
        classes.push_str(" !text-context-failure-dark");
    }
    if meta == Some(&Meta::Scenarios) {
        classes.push_str(" !text-neutral-base");
    }
    if meta == Some(&Meta::Notes) {
        classes.push_str(" !text-context-warning-dark");
    }
    classes
}
