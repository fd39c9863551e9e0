//! [`Viewport`] over the browser window.

use roadmap_navigation::{ScrollBehavior, Viewport};
use web_sys::{Element, ScrollIntoViewOptions, Window};

/// The window's scrolling viewport, with section elements as anchors.
#[derive(Debug, Clone)]
pub struct DomViewport {
    window: Window,
}

impl DomViewport {
    /// Wrap `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport<Element> for DomViewport {
    fn height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn anchor_top(&self, anchor: &Element) -> f64 {
        anchor.get_bounding_client_rect().top()
    }

    fn scroll_into_view(&self, anchor: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
