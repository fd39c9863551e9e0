//! Shared helpers for HTML output.

use std::borrow::Cow;

/// Escape text for HTML element content and attribute values.
///
/// # Examples
///
/// ```
/// use roadmap_renderer::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render description text, one line break pair after every `\n`-separated
/// line, in order.
///
/// # Examples
///
/// ```
/// use roadmap_renderer::render_paragraphs;
///
/// let mut out = String::new();
/// render_paragraphs("first\nsecond", &mut out);
/// assert_eq!(out, "first<br><br>second<br><br>");
/// ```
pub fn render_paragraphs(text: &str, out: &mut String) {
    for line in text.split('\n') {
        out.push_str(&escape_html(line));
        out.push_str("<br><br>");
    }
}

/// Optional text that renders only when non-empty.
pub(crate) fn present(text: Option<&String>) -> Option<&str> {
    text.map(String::as_str).filter(|s| !s.is_empty())
}

/// Material Symbols icon span.
pub(crate) fn icon(name: &str, extra_classes: &str, out: &mut String) {
    out.push_str(r#"<span class="material-symbols-outlined"#);
    if !extra_classes.is_empty() {
        out.push(' ');
        out.push_str(extra_classes);
    }
    out.push_str(r#"" aria-hidden="true">"#);
    out.push_str(name);
    out.push_str("</span>");
}
