//! HTML document shell: head, app header and top navigation.

use std::fmt::Write;

use roadmap_renderer::escape_html;

use crate::site::NavLink;

const APP_TITLE: &str = "Roadmap";
const APP_TAGLINE: &str = "A roadmap towards Senior Frontend Developer";
/// Loader that initializes the wasm bundle and calls its `mount()`.
const BROWSER_SCRIPT: &str = "/assets/roadmap.js";

/// Wrap a page body in the full document.
pub(crate) fn render_document(title: &str, page_path: &str, links: &[NavLink], body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2048);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(
        out,
        "<title>{} | {APP_TITLE}</title>",
        escape_html(title)
    )
    .unwrap();
    out.push_str(
        "<link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined\">\n",
    );
    writeln!(out, r#"<script type="module" src="{BROWSER_SCRIPT}"></script>"#).unwrap();
    out.push_str("</head>\n");
    writeln!(
        out,
        r#"<body class="bg-neutral-base text-white" data-page="{}">"#,
        escape_html(page_path)
    )
    .unwrap();
    out.push_str(r#"<div class="p-4 flex flex-col items-center gap-8">"#);
    write!(
        out,
        r#"<header class="flex flex-col items-center mb-4"><h1 class="text-xl">{APP_TITLE}</h1><p class="text-white/50 text-sm">{APP_TAGLINE}</p></header>"#
    )
    .unwrap();
    render_top_nav(links, &mut out);
    out.push_str(body);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn render_top_nav(links: &[NavLink], out: &mut String) {
    out.push_str(r#"<div class="overflow-x-auto w-full whitespace-nowrap"><nav class="flex gap-4 mb-8 text-sm">"#);
    for link in links {
        let state = if link.active {
            "text-primary hover:text-primary"
        } else {
            "text-white/50"
        };
        write!(
            out,
            r#"<a href="{}" class="transition hover:text-white {state}""#,
            escape_html(&link.path)
        )
        .unwrap();
        if link.active {
            out.push_str(r#" aria-current="page""#);
        }
        out.push('>');
        out.push_str(&escape_html(&link.label));
        out.push_str("</a>");
    }
    out.push_str("</nav></div>");
}
