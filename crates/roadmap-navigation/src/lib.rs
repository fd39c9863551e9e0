//! Active-section tracking for the roadmap side navigation.
//!
//! The side navigation shows one entry per section and highlights the section
//! the reader is looking at. Two signals feed the highlight:
//!
//! - **Scroll debounce**: every scroll event re-arms a 100 ms deadline. When
//!   it passes, anchors are scanned in order and the first one whose top edge
//!   lies in the upper half of the viewport wins.
//! - **Intersection**: a visibility observer reports anchors crossing the 75%
//!   visibility threshold.
//!
//! [`SideNavigation`] reconciles both according to its [`SignalPolicy`].
//! It owns no timers and reads no clocks: the host feeds it events with a
//! [`Timestamp`], calls [`SideNavigation::poll`] when
//! [`SideNavigation::next_deadline`] passes, and supplies geometry through the
//! [`Viewport`] trait. This keeps the state machine identical in the browser
//! binding and in tests.
//!
//! # Example
//!
//! ```
//! use roadmap_navigation::{AnchorRegistry, ScrollBehavior, SideNavigation, Timestamp, Viewport};
//!
//! struct Page {
//!     tops: Vec<f64>,
//! }
//!
//! impl Viewport<usize> for Page {
//!     fn height(&self) -> f64 {
//!         1000.0
//!     }
//!     fn anchor_top(&self, anchor: &usize) -> f64 {
//!         self.tops[*anchor]
//!     }
//!     fn scroll_into_view(&self, _anchor: &usize, _behavior: ScrollBehavior) {}
//! }
//!
//! let anchors = AnchorRegistry::new();
//! for i in 0..3 {
//!     anchors.register(i, i);
//! }
//!
//! let mut nav = SideNavigation::new(anchors.clone());
//! let page = Page { tops: vec![-900.0, -300.0, 400.0] };
//!
//! nav.on_scroll(Timestamp::from_millis(0.0));
//! nav.poll(Timestamp::from_millis(100.0), &page);
//! assert_eq!(nav.active(), Some(2));
//! ```

mod anchors;
mod side_navigation;
mod time;
mod viewport;

pub use anchors::AnchorRegistry;
pub use side_navigation::{
    DEBOUNCE, IntersectionEntry, NavEntry, PollOutcome, SideNavigation, SignalPolicy,
    VISIBILITY_THRESHOLD,
};
pub use time::Timestamp;
pub use viewport::{ScrollBehavior, Viewport};
