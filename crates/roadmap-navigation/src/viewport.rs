//! Geometry supplied by the host.

/// How a scroll request should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll.
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// The scrolling viewport that section anchors live in.
///
/// Implemented over the DOM in `roadmap-web` and over plain numbers in tests.
pub trait Viewport<A> {
    /// Viewport height in CSS pixels.
    fn height(&self) -> f64;

    /// Distance from the viewport top to the anchor's top edge. Negative once
    /// the anchor has scrolled above the viewport.
    fn anchor_top(&self, anchor: &A) -> f64;

    /// Scroll the anchor into view.
    fn scroll_into_view(&self, anchor: &A, behavior: ScrollBehavior);
}
