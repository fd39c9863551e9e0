//! Small DOM helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub(crate) const SECTION_ATTR: &str = "data-section-index";
pub(crate) const NAV_ATTR: &str = "data-nav-index";
pub(crate) const TOGGLE_ATTR: &str = "data-toggle-index";

/// Class marking the active navigation item.
pub(crate) const ACTIVE_CLASS: &str = "text-primary";

/// Parse an index attribute value.
pub(crate) fn parse_index(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok()
}

/// Index stored in `attr` on `element`.
pub(crate) fn element_index(element: &Element, attr: &str) -> Option<usize> {
    parse_index(element.get_attribute(attr).as_deref())
}

/// Elements carrying `attr`, paired with its parsed index.
///
/// Elements whose attribute doesn't parse are skipped.
pub(crate) fn indexed_elements(document: &Document, attr: &str) -> Vec<(usize, Element)> {
    let Ok(nodes) = document.query_selector_all(&format!("[{attr}]")) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| element_index(&element, attr).map(|index| (index, element)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(Some("3")), Some(3));
        assert_eq!(parse_index(Some(" 12 ")), Some(12));
    }

    #[test]
    fn test_parse_index_rejects_garbage() {
        assert_eq!(parse_index(None), None);
        assert_eq!(parse_index(Some("")), None);
        assert_eq!(parse_index(Some("-1")), None);
        assert_eq!(parse_index(Some("two")), None);
    }
}
