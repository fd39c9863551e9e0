//! Block renderer.

use std::fmt::Write;

use roadmap_content::Block;

use crate::leaf::{render_code_panel, render_sub_block};
use crate::presentation::Presentation;
use crate::util::{escape_html, icon, present, render_paragraphs};

/// Widest sub-block grid.
pub const MAX_COLUMNS: usize = 4;

/// Grid columns for a block's sub-blocks: `min(count, 4)`.
///
/// # Examples
///
/// ```
/// use roadmap_content::{Block, SubBlock};
/// use roadmap_renderer::column_count;
///
/// let block = Block {
///     sub_blocks: Some(vec![SubBlock::default(); 6]),
///     ..Default::default()
/// };
/// assert_eq!(column_count(&block), 4);
/// assert_eq!(column_count(&Block::default()), 0);
/// ```
#[must_use]
pub fn column_count(block: &Block) -> usize {
    block.sub_blocks().len().min(MAX_COLUMNS)
}

/// Render one block: icon badge, header, description, code sample, then the
/// sub-block grid.
///
/// Signature blocks drop the header and render as a code banner.
pub fn render_block(block: &Block, out: &mut String) {
    let presentation = Presentation::for_meta(block.meta.as_ref());
    let signature = block.is_signature();

    out.push_str(
        r#"<section class="block relative lg:pl-6 flex flex-col lg:flex-row gap-4 lg:gap-0 items-center transition""#,
    );
    if let Some(meta) = &block.meta {
        write!(out, r#" data-meta="{}""#, escape_html(meta.as_str())).unwrap();
    }
    out.push('>');

    let mut badge = String::from(
        "bg-context-info text-neutral-base text-base relative lg:-left-9 p-1 shadow-lg border-t border-white/20",
    );
    let tone = presentation.tone.icon_classes();
    if !tone.is_empty() {
        badge.push(' ');
        badge.push_str(tone);
    }
    if block.meta.is_some() {
        badge.push_str(" rounded");
    }
    icon(presentation.icon, &badge, out);

    if signature {
        out.push_str(r#"<div class="p-4 rounded w-full bg-code-javascript text-black">"#);
    } else {
        out.push_str(r#"<div class="p-4 rounded w-full bg-neutral-light">"#);
        out.push_str(r#"<header class="-top-1 relative mb-4"><h1 class="text-base">"#);
        out.push_str(&escape_html(&block.title));
        out.push_str("</h1></header>");
    }

    if signature {
        out.push_str(r#"<main class="text-white/50 text-sm flex flex-col">"#);
    } else {
        out.push_str(r#"<main class="text-white/50 text-sm flex flex-col gap-4">"#);
    }
    if let Some(description) = present(block.description.as_ref()) {
        out.push_str(r#"<p class="description">"#);
        render_paragraphs(description, out);
        out.push_str("</p>");
    }
    if let Some(sample) = present(block.code_sample.as_ref()) {
        render_code_panel(sample, block.language.as_deref(), out);
    }

    let columns = column_count(block);
    if columns > 0 {
        write!(
            out,
            r#"<div class="sub-blocks grid grid-cols-1 lg:grid-cols-{columns} gap-4">"#
        )
        .unwrap();
        for sub in block.sub_blocks() {
            render_sub_block(sub, block.meta.as_ref(), out);
        }
        out.push_str("</div>");
    }

    out.push_str("</main></div></section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_content::{Meta, SubBlock};

    fn render(block: &Block) -> String {
        let mut out = String::new();
        render_block(block, &mut out);
        out
    }

    fn with_subs(n: usize) -> Block {
        Block {
            title: "Pros".to_owned(),
            meta: Some(Meta::Positive),
            sub_blocks: Some(
                (0..n)
                    .map(|i| SubBlock {
                        title: format!("pro {i}"),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_column_count_caps_at_four() {
        for (n, expected) in [(0, 0), (1, 1), (3, 3), (4, 4), (5, 4), (12, 4)] {
            assert_eq!(column_count(&with_subs(n)), expected, "{n} sub-blocks");
        }
        assert_eq!(column_count(&Block::default()), 0);
    }

    #[test]
    fn test_grid_columns_in_markup() {
        let html = render(&with_subs(2));
        assert!(html.contains("lg:grid-cols-2"));

        let html = render(&with_subs(7));
        assert!(html.contains("lg:grid-cols-4"));
        assert_eq!(html.matches(r#"<div class="sub-block "#).count(), 7);
    }

    #[test]
    fn test_no_grid_when_empty_or_absent() {
        assert!(!render(&with_subs(0)).contains("grid-cols"));
        assert!(!render(&Block::default()).contains("grid-cols"));
    }

    #[test]
    fn test_signature_has_no_header() {
        let block = Block {
            title: "Signature".to_owned(),
            meta: Some(Meta::Signature),
            code_sample: Some("process.nextTick(callback)".to_owned()),
            ..Default::default()
        };

        let html = render(&block);

        assert!(!html.contains("<header"));
        assert!(!html.contains(">Signature</h1>"));
        assert!(html.contains("bg-code-javascript text-black"));
        assert!(html.contains(">deployed_code</span>"));
    }

    #[test]
    fn test_other_metas_have_header() {
        for meta in [
            Some(Meta::Positive),
            Some(Meta::Problem),
            Some(Meta::Other("custom".to_owned())),
            None,
        ] {
            let block = Block {
                title: "Heading".to_owned(),
                meta: meta.clone(),
                ..Default::default()
            };
            assert!(
                render(&block).contains(r#"<h1 class="text-base">Heading</h1>"#),
                "{meta:?}"
            );
        }
    }

    #[test]
    fn test_body_order() {
        let block = Block {
            title: "t".to_owned(),
            description: Some("intro".to_owned()),
            code_sample: Some("x()".to_owned()),
            language: Some("typescript".to_owned()),
            sub_blocks: Some(vec![SubBlock {
                title: "sub".to_owned(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let html = render(&block);

        let description = html.find("intro<br><br>").unwrap();
        let code = html.find(r#"<code class="language-typescript">"#).unwrap();
        let grid = html.find("sub-blocks grid").unwrap();
        assert!(description < code && code < grid);
    }

    #[test]
    fn test_unknown_meta_uses_default_icon() {
        let block = Block {
            meta: Some(Meta::from("mystery")),
            ..Default::default()
        };

        let html = render(&block);

        assert!(html.contains(">radio_button_checked</span>"));
        assert!(html.contains(r#"data-meta="mystery""#));
    }

    #[test]
    fn test_sub_blocks_inherit_block_meta() {
        let html = render(&with_subs(1));
        assert!(html.contains("!bg-context-success-base text-context-success-dark\">"));
    }
}
