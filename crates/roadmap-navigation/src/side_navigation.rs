//! The side navigation state machine.

use std::time::Duration;

use roadmap_content::Section;

use crate::anchors::AnchorRegistry;
use crate::time::Timestamp;
use crate::viewport::{ScrollBehavior, Viewport};

/// Scroll inactivity required before the scroll scan runs.
pub const DEBOUNCE: Duration = Duration::from_millis(100);

/// Visibility ratio at which an anchor counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.75;

/// How the scroll and intersection signals are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignalPolicy {
    /// Whichever signal reports last sets the active section. A scroll scan
    /// that finds nothing clears it. Rapid scrolling can flicker.
    LastWriteWins,
    /// The most recent anchor still at or above the visibility threshold is
    /// active. The scroll scan only applies while no anchor is above the
    /// threshold, and a scan that finds nothing keeps the current highlight.
    #[default]
    VisibilityFirst,
}

/// One visibility observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Section index of the observed anchor.
    pub index: usize,
    /// Visible fraction of the anchor, `0.0..=1.0`.
    pub ratio: f64,
}

/// Result of [`SideNavigation::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No scroll is pending.
    Idle,
    /// The debounce deadline has not passed yet.
    Pending,
    /// The scan ran; `changed` tells whether the active section moved.
    Fired {
        /// Active section changed.
        changed: bool,
    },
}

/// One rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Section index.
    pub index: usize,
    /// Section title, verbatim.
    pub title: String,
    /// Whether this entry is highlighted.
    pub active: bool,
}

/// Side navigation state for one page.
///
/// Holds the active section index plus the bookkeeping both signals need.
/// After [`unmount`](Self::unmount) every event is ignored.
#[derive(Debug)]
pub struct SideNavigation<A> {
    anchors: AnchorRegistry<A>,
    policy: SignalPolicy,
    debounce: Duration,
    active: Option<usize>,
    deadline: Option<Timestamp>,
    /// Anchors currently at or above the threshold, oldest first.
    visible: Vec<usize>,
    mounted: bool,
}

impl<A: Clone> SideNavigation<A> {
    /// Create navigation state reading from `anchors`.
    #[must_use]
    pub fn new(anchors: AnchorRegistry<A>) -> Self {
        Self {
            anchors,
            policy: SignalPolicy::default(),
            debounce: DEBOUNCE,
            active: None,
            deadline: None,
            visible: Vec::new(),
            mounted: true,
        }
    }

    /// Use a different reconciliation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SignalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a different debounce interval.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Index of the highlighted section.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Reconciliation policy in use.
    #[must_use]
    pub fn policy(&self) -> SignalPolicy {
        self.policy
    }

    /// The anchors this navigation reads.
    #[must_use]
    pub fn anchors(&self) -> &AnchorRegistry<A> {
        &self.anchors
    }

    /// False once [`unmount`](Self::unmount) has run.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// When the pending scroll scan is due, for host timer scheduling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Record a scroll event, (re)arming the debounce deadline.
    pub fn on_scroll(&mut self, now: Timestamp) {
        if !self.mounted {
            return;
        }
        self.deadline = Some(now + self.debounce);
    }

    /// Run the scroll scan if its deadline has passed.
    pub fn poll(&mut self, now: Timestamp, viewport: &impl Viewport<A>) -> PollOutcome {
        let Some(deadline) = self.deadline else {
            return PollOutcome::Idle;
        };
        if now < deadline {
            return PollOutcome::Pending;
        }
        self.deadline = None;

        let found = self.scan(viewport);
        let next = match self.policy {
            SignalPolicy::LastWriteWins => found,
            SignalPolicy::VisibilityFirst => {
                if self.visible.is_empty() {
                    found.or(self.active)
                } else {
                    self.active
                }
            }
        };

        PollOutcome::Fired {
            changed: self.set_active(next, "scroll"),
        }
    }

    /// Apply visibility observations. Returns true if the active section
    /// changed.
    ///
    /// Entries for indices outside the registry are ignored.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> bool {
        if !self.mounted {
            return false;
        }

        let mut changed = false;
        for entry in entries {
            if entry.index >= self.anchors.len() {
                continue;
            }
            let visible = entry.ratio >= VISIBILITY_THRESHOLD;
            self.visible.retain(|&i| i != entry.index);
            if visible {
                self.visible.push(entry.index);
            }

            let next = match self.policy {
                SignalPolicy::LastWriteWins if visible => Some(entry.index),
                SignalPolicy::LastWriteWins => self.active,
                SignalPolicy::VisibilityFirst => self.visible.last().copied().or(self.active),
            };
            changed |= self.set_active(next, "intersection");
        }
        changed
    }

    /// Scroll section `index` into view. Returns false if its anchor is not
    /// mounted.
    ///
    /// The active section is left alone; one of the signals catches up once
    /// the scroll lands.
    pub fn click(&self, index: usize, viewport: &impl Viewport<A>) -> bool {
        match self.anchors.get(index) {
            Some(anchor) => {
                viewport.scroll_into_view(&anchor, ScrollBehavior::Smooth);
                true
            }
            None => false,
        }
    }

    /// Cancel the pending scan and stop reacting to events.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.deadline = None;
        self.visible.clear();
    }

    /// One entry per section, same order, same titles.
    #[must_use]
    pub fn entries(&self, sections: &[Section]) -> Vec<NavEntry> {
        sections
            .iter()
            .enumerate()
            .map(|(index, section)| NavEntry {
                index,
                title: section.title.clone(),
                active: self.active == Some(index),
            })
            .collect()
    }

    /// First mounted anchor whose top lies in `[0, height / 2)`.
    fn scan(&self, viewport: &impl Viewport<A>) -> Option<usize> {
        let limit = viewport.height() / 2.0;
        self.anchors
            .mounted()
            .into_iter()
            .find(|(_, anchor)| {
                let top = viewport.anchor_top(anchor);
                (0.0..limit).contains(&top)
            })
            .map(|(index, _)| index)
    }

    fn set_active(&mut self, next: Option<usize>, signal: &'static str) -> bool {
        if next == self.active {
            return false;
        }
        tracing::trace!(from = ?self.active, to = ?next, signal, "Active section changed");
        self.active = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;

    /// Viewport over fixed anchor tops, recording scroll requests.
    struct FakeViewport {
        height: f64,
        tops: Vec<f64>,
        scrolled: RefCell<Vec<(usize, ScrollBehavior)>>,
    }

    impl FakeViewport {
        fn new(height: f64, tops: Vec<f64>) -> Self {
            Self {
                height,
                tops,
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport<usize> for FakeViewport {
        fn height(&self) -> f64 {
            self.height
        }

        fn anchor_top(&self, anchor: &usize) -> f64 {
            self.tops[*anchor]
        }

        fn scroll_into_view(&self, anchor: &usize, behavior: ScrollBehavior) {
            self.scrolled.borrow_mut().push((*anchor, behavior));
        }
    }

    fn registry(n: usize) -> AnchorRegistry<usize> {
        let anchors = AnchorRegistry::new();
        for i in 0..n {
            anchors.register(i, i);
        }
        anchors
    }

    fn ms(millis: f64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    fn section(title: &str) -> Section {
        Section {
            title: title.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initially_inactive() {
        let nav = SideNavigation::new(registry(3));
        assert_eq!(nav.active(), None);
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn test_scroll_scan_activates_after_debounce() {
        // Section 2's top at 40% of an 1000px viewport.
        let viewport = FakeViewport::new(1000.0, vec![-2000.0, -600.0, 400.0, 1400.0]);
        let mut nav = SideNavigation::new(registry(4));

        nav.on_scroll(ms(0.0));
        assert_eq!(nav.poll(ms(99.0), &viewport), PollOutcome::Pending);
        assert_eq!(nav.active(), None);

        assert_eq!(
            nav.poll(ms(100.0), &viewport),
            PollOutcome::Fired { changed: true }
        );
        assert_eq!(nav.active(), Some(2));
        assert_eq!(nav.poll(ms(200.0), &viewport), PollOutcome::Idle);
    }

    #[test]
    fn test_scroll_events_restart_debounce() {
        let viewport = FakeViewport::new(1000.0, vec![0.0]);
        let mut nav = SideNavigation::new(registry(1));

        nav.on_scroll(ms(0.0));
        nav.on_scroll(ms(80.0));

        assert_eq!(nav.poll(ms(150.0), &viewport), PollOutcome::Pending);
        assert_eq!(nav.next_deadline(), Some(ms(180.0)));
        assert_eq!(
            nav.poll(ms(180.0), &viewport),
            PollOutcome::Fired { changed: true }
        );
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_scan_upper_half_bounds() {
        // Top exactly at half height is outside, top at 0 is inside.
        let viewport = FakeViewport::new(1000.0, vec![500.0, 0.0]);
        let mut nav = SideNavigation::new(registry(2)).with_policy(SignalPolicy::LastWriteWins);

        nav.on_scroll(ms(0.0));
        nav.poll(ms(100.0), &viewport);

        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_scan_skips_unmounted_anchors() {
        let anchors = AnchorRegistry::new();
        anchors.register(1, 1);
        anchors.register(2, 2);
        let viewport = FakeViewport::new(1000.0, vec![100.0, -50.0, 200.0]);
        let mut nav = SideNavigation::new(anchors);

        nav.on_scroll(ms(0.0));
        nav.poll(ms(100.0), &viewport);

        assert_eq!(nav.active(), Some(2));
    }

    #[test]
    fn test_last_write_wins_scan_without_match_clears() {
        let viewport = FakeViewport::new(1000.0, vec![-3000.0, 900.0]);
        let mut nav = SideNavigation::new(registry(2)).with_policy(SignalPolicy::LastWriteWins);

        nav.on_intersection(&[IntersectionEntry {
            index: 0,
            ratio: 0.8,
        }]);
        assert_eq!(nav.active(), Some(0));

        nav.on_scroll(ms(0.0));
        nav.poll(ms(100.0), &viewport);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_last_write_wins_intersection_overrides_scan() {
        let viewport = FakeViewport::new(1000.0, vec![-500.0, 100.0, 900.0]);
        let mut nav = SideNavigation::new(registry(3)).with_policy(SignalPolicy::LastWriteWins);

        nav.on_scroll(ms(0.0));
        nav.poll(ms(100.0), &viewport);
        assert_eq!(nav.active(), Some(1));

        nav.on_intersection(&[IntersectionEntry {
            index: 2,
            ratio: 0.9,
        }]);
        assert_eq!(nav.active(), Some(2));
    }

    #[test]
    fn test_intersection_below_threshold_ignored() {
        let mut nav = SideNavigation::new(registry(2));

        let changed = nav.on_intersection(&[IntersectionEntry {
            index: 1,
            ratio: 0.5,
        }]);

        assert!(!changed);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_intersection_threshold_inclusive() {
        let mut nav = SideNavigation::new(registry(2));

        nav.on_intersection(&[IntersectionEntry {
            index: 1,
            ratio: VISIBILITY_THRESHOLD,
        }]);

        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_intersection_unknown_index_ignored() {
        let mut nav = SideNavigation::new(registry(2));

        nav.on_intersection(&[IntersectionEntry {
            index: 5,
            ratio: 1.0,
        }]);

        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_visibility_first_scan_does_not_override_visible_anchor() {
        // Scroll scan would pick section 0, but section 1 is fully visible.
        let viewport = FakeViewport::new(1000.0, vec![10.0, 300.0]);
        let mut nav = SideNavigation::new(registry(2));

        nav.on_intersection(&[IntersectionEntry {
            index: 1,
            ratio: 1.0,
        }]);
        nav.on_scroll(ms(0.0));
        let outcome = nav.poll(ms(100.0), &viewport);

        assert_eq!(outcome, PollOutcome::Fired { changed: false });
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_visibility_first_falls_back_to_scan() {
        let viewport = FakeViewport::new(1000.0, vec![-800.0, 200.0]);
        let mut nav = SideNavigation::new(registry(2));

        nav.on_intersection(&[IntersectionEntry {
            index: 0,
            ratio: 0.9,
        }]);
        nav.on_intersection(&[IntersectionEntry {
            index: 0,
            ratio: 0.2,
        }]);
        // Nothing above threshold; highlight stays until the scan runs.
        assert_eq!(nav.active(), Some(0));

        nav.on_scroll(ms(0.0));
        nav.poll(ms(100.0), &viewport);
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_visibility_first_scan_without_match_keeps_highlight() {
        let viewport = FakeViewport::new(1000.0, vec![-3000.0, 900.0]);
        let mut nav = SideNavigation::new(registry(2));

        nav.on_intersection(&[
            IntersectionEntry {
                index: 0,
                ratio: 0.8,
            },
            IntersectionEntry {
                index: 0,
                ratio: 0.1,
            },
        ]);
        nav.on_scroll(ms(0.0));
        nav.poll(ms(100.0), &viewport);

        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_visibility_first_returns_to_previous_visible() {
        let mut nav = SideNavigation::new(registry(3));

        nav.on_intersection(&[
            IntersectionEntry {
                index: 0,
                ratio: 1.0,
            },
            IntersectionEntry {
                index: 1,
                ratio: 0.8,
            },
        ]);
        assert_eq!(nav.active(), Some(1));

        nav.on_intersection(&[IntersectionEntry {
            index: 1,
            ratio: 0.3,
        }]);
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_click_scrolls_without_changing_active() {
        let viewport = FakeViewport::new(1000.0, vec![0.0; 5]);
        let mut nav = SideNavigation::new(registry(5));
        nav.on_intersection(&[IntersectionEntry {
            index: 0,
            ratio: 1.0,
        }]);

        assert!(nav.click(3, &viewport));

        assert_eq!(
            *viewport.scrolled.borrow(),
            vec![(3, ScrollBehavior::Smooth)]
        );
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn test_click_unmounted_anchor_is_noop() {
        let viewport = FakeViewport::new(1000.0, vec![]);
        let nav = SideNavigation::new(AnchorRegistry::<usize>::new());

        assert!(!nav.click(3, &viewport));
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_unmount_cancels_pending_scan() {
        let viewport = FakeViewport::new(1000.0, vec![100.0]);
        let mut nav = SideNavigation::new(registry(1));

        nav.on_scroll(ms(0.0));
        nav.unmount();

        assert!(!nav.is_mounted());
        assert_eq!(nav.next_deadline(), None);
        assert_eq!(nav.poll(ms(500.0), &viewport), PollOutcome::Idle);

        nav.on_scroll(ms(600.0));
        assert_eq!(nav.next_deadline(), None);
        assert!(!nav.on_intersection(&[IntersectionEntry {
            index: 0,
            ratio: 1.0,
        }]));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_entries_match_sections() {
        let sections = vec![section("Event Loop"), section("Streams"), section("Buffers")];
        let mut nav = SideNavigation::new(registry(3));
        nav.on_intersection(&[IntersectionEntry {
            index: 1,
            ratio: 1.0,
        }]);

        let entries = nav.entries(&sections);

        assert_eq!(entries.len(), 3);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Event Loop", "Streams", "Buffers"]);
        let active: Vec<bool> = entries.iter().map(|e| e.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }
}
