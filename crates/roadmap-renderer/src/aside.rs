//! Side navigation markup.

use std::fmt::Write;

use roadmap_navigation::NavEntry;

use crate::util::escape_html;

/// Render the side navigation: a title header and one entry per section.
///
/// Entries carry `data-nav-index` so a client binding can route clicks back
/// to the section; the active entry gets `text-primary`.
pub fn render_aside(title: &str, entries: &[NavEntry], out: &mut String) {
    out.push_str(
        r#"<div class="aside-navigation"><aside class="bg-neutral-light rounded-lg sticky top-16 z-10"><header class="p-4 bg-black/20 border-b border-white/10"><h1>"#,
    );
    out.push_str(&escape_html(title));
    out.push_str(r#"</h1></header><ul class="flex flex-col p-4">"#);
    for entry in entries {
        let active = if entry.active { " text-primary" } else { "" };
        write!(
            out,
            r#"<li class="text-xs mb-4 cursor-pointer transition{active}" data-nav-index="{}">"#,
            entry.index
        )
        .unwrap();
        out.push_str(&escape_html(&entry.title));
        out.push_str("</li>");
    }
    out.push_str("</ul></aside></div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(index: usize, title: &str, active: bool) -> NavEntry {
        NavEntry {
            index,
            title: title.to_owned(),
            active,
        }
    }

    #[test]
    fn test_entries_in_order_with_titles() {
        let entries = vec![
            entry(0, "Event Loop", false),
            entry(1, "Streams", false),
            entry(2, "Buffers", false),
        ];
        let mut out = String::new();

        render_aside("Node.js", &entries, &mut out);

        assert_eq!(out.matches("<li ").count(), 3);
        let titles: Vec<usize> = ["Event Loop", "Streams", "Buffers"]
            .iter()
            .map(|t| out.find(&format!(">{t}</li>")).unwrap())
            .collect();
        assert!(titles.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("<h1>Node.js</h1>"));
    }

    #[test]
    fn test_active_entry_highlighted() {
        let entries = vec![entry(0, "A", false), entry(1, "B", true)];
        let mut out = String::new();

        render_aside("T", &entries, &mut out);

        assert!(out.contains(
            r#"<li class="text-xs mb-4 cursor-pointer transition" data-nav-index="0">A</li>"#
        ));
        assert!(out.contains(
            r#"<li class="text-xs mb-4 cursor-pointer transition text-primary" data-nav-index="1">B</li>"#
        ));
    }

    #[test]
    fn test_no_entries() {
        let mut out = String::new();
        render_aside("Empty", &[], &mut out);
        assert!(out.contains(r#"<ul class="flex flex-col p-4"></ul>"#));
    }
}
