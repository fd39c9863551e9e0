//! Event wiring between the document and [`SideNavigation`].
//!
//! ```text
//! window "scroll" ──► on_scroll ──► setTimeout(debounce) ──► poll ──┐
//! IntersectionObserver(0.75) ──────────────► on_intersection ───────┼──► highlight
//! li[data-nav-index] "click" ──► click ──► scrollIntoView           │
//! button[data-toggle-index] "click" ──► toggle_and_save ──► show/hide blocks
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use roadmap_navigation::{
    AnchorRegistry, IntersectionEntry, PollOutcome, SideNavigation, Timestamp,
    VISIBILITY_THRESHOLD,
};
use roadmap_renderer::render_toggle_label;
use roadmap_storage::{HiddenSections, KeyValueStore, MemoryStore};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom::{
    ACTIVE_CLASS, NAV_ATTR, SECTION_ATTR, TOGGLE_ATTR, element_index, indexed_elements,
};
use crate::storage::LocalStorage;
use crate::viewport::DomViewport;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

type EventClosure = Closure<dyn FnMut(Event)>;
type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;
type TimerClosure = Closure<dyn FnMut()>;

/// State shared by every callback.
struct Inner {
    window: Window,
    viewport: DomViewport,
    navigation: RefCell<SideNavigation<Element>>,
    store: Box<dyn KeyValueStore>,
    nav_items: Vec<(usize, Element)>,
    toggles: Vec<(usize, Element)>,

    /// The debounce callback. Holds an `Rc<Inner>`; taken on drop to break
    /// the cycle.
    timer: RefCell<Option<TimerClosure>>,

    /// Pending `setTimeout` handle.
    timeout_id: Cell<Option<i32>>,
}

impl Inner {
    fn now() -> Timestamp {
        Timestamp::from_millis(performance_now())
    }

    fn on_scroll(&self) {
        self.navigation.borrow_mut().on_scroll(Self::now());
        self.schedule();
    }

    /// Arm the timeout for the pending scan deadline.
    fn schedule(&self) {
        self.cancel_timeout();
        let Some(deadline) = self.navigation.borrow().next_deadline() else {
            return;
        };
        let timer = self.timer.borrow();
        let Some(timer) = timer.as_ref() else {
            return;
        };

        #[expect(
            clippy::cast_possible_truncation,
            reason = "delay is bounded by the debounce interval"
        )]
        let delay_ms = (deadline.as_millis() - performance_now()).max(0.0).ceil() as i32;

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                timer.as_ref().unchecked_ref(),
                delay_ms,
            ) {
            Ok(id) => self.timeout_id.set(Some(id)),
            Err(e) => tracing::warn!(error = ?e, "Failed to schedule scroll scan"),
        }
    }

    fn cancel_timeout(&self) {
        if let Some(id) = self.timeout_id.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn on_timer(&self) {
        self.timeout_id.set(None);
        let outcome = self
            .navigation
            .borrow_mut()
            .poll(Self::now(), &self.viewport);
        match outcome {
            PollOutcome::Fired { changed: true } => self.highlight(),
            // Timers may fire a little early.
            PollOutcome::Pending => self.schedule(),
            PollOutcome::Fired { changed: false } | PollOutcome::Idle => {}
        }
    }

    fn on_intersection(&self, entries: &[IntersectionEntry]) {
        let changed = self.navigation.borrow_mut().on_intersection(entries);
        if changed {
            self.highlight();
        }
    }

    fn click(&self, index: usize) {
        if !self.navigation.borrow().click(index, &self.viewport) {
            tracing::debug!(index, "Navigation target not mounted");
        }
    }

    fn toggle(&self, index: usize) {
        match HiddenSections::toggle_and_save(self.store.as_ref(), index) {
            Ok(hidden) => self.show_hidden(index, hidden),
            Err(e) => tracing::warn!(index, error = %e, "Failed to save section state"),
        }
    }

    /// Move the `text-primary` class to the active navigation item.
    fn highlight(&self) {
        let active = self.navigation.borrow().active();
        for (index, item) in &self.nav_items {
            if let Err(e) = item
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, active == Some(*index))
            {
                tracing::warn!(index, error = ?e, "Failed to update navigation item");
            }
        }
    }

    /// Reflect a section's hidden flag on its toggle and blocks.
    fn show_hidden(&self, index: usize, hidden: bool) {
        if let Some((_, toggle)) = self.toggles.iter().find(|(i, _)| *i == index) {
            let mut label = String::new();
            render_toggle_label(hidden, &mut label);
            toggle.set_inner_html(&label);
            if let Err(e) = toggle.set_attribute("aria-pressed", if hidden { "true" } else { "false" })
            {
                tracing::warn!(index, error = ?e, "Failed to update toggle");
            }
        }

        // Sections hidden at render time have no blocks to reveal.
        let blocks = self
            .navigation
            .borrow()
            .anchors()
            .get(index)
            .and_then(|section| section.query_selector(".blocks").ok().flatten());
        if let Some(blocks) = blocks
            && let Err(e) = blocks.toggle_attribute_with_force("hidden", hidden)
        {
            tracing::warn!(index, error = ?e, "Failed to update section blocks");
        }
    }
}

/// Listeners installed on the current document.
///
/// Dropping the binding unmounts the navigation, clears the pending timeout,
/// disconnects the observer and removes every listener.
pub struct PageBinding {
    inner: Rc<Inner>,
    scroll: EventClosure,
    observer: IntersectionObserver,
    _observer_callback: ObserverClosure,
    clicks: Vec<(Element, EventClosure)>,
}

impl PageBinding {
    /// Bind to `window.document`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if the window or document is missing or a
    /// listener can't be installed.
    pub fn mount() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let path = document
            .body()
            .and_then(|body| body.get_attribute("data-page"))
            .unwrap_or_else(|| "/".to_owned());
        let store: Box<dyn KeyValueStore> = match LocalStorage::for_page(&window, &path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "Section state will not persist");
                Box::new(MemoryStore::new())
            }
        };

        let anchors = AnchorRegistry::new();
        for (index, section) in indexed_elements(&document, SECTION_ATTR) {
            anchors.register(index, section);
        }

        let inner = Rc::new(Inner {
            viewport: DomViewport::new(window.clone()),
            window,
            navigation: RefCell::new(SideNavigation::new(anchors)),
            store,
            nav_items: indexed_elements(&document, NAV_ATTR),
            toggles: indexed_elements(&document, TOGGLE_ATTR),
            timer: RefCell::new(None),
            timeout_id: Cell::new(None),
        });

        let timer_inner = Rc::clone(&inner);
        let timer = Closure::wrap(Box::new(move || timer_inner.on_timer()) as Box<dyn FnMut()>);
        *inner.timer.borrow_mut() = Some(timer);

        let scroll_inner = Rc::clone(&inner);
        let scroll = Closure::wrap(
            Box::new(move |_event: Event| scroll_inner.on_scroll()) as Box<dyn FnMut(_)>
        );
        inner
            .window
            .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())?;

        let observer_inner = Rc::clone(&inner);
        let observer_callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let entries: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        element_index(&entry.target(), SECTION_ATTR).map(|index| {
                            IntersectionEntry {
                                index,
                                ratio: entry.intersection_ratio(),
                            }
                        })
                    })
                    .collect();
                observer_inner.on_intersection(&entries);
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            observer_callback.as_ref().unchecked_ref(),
            &options,
        )?;
        for (_, section) in inner.navigation.borrow().anchors().mounted() {
            observer.observe(&section);
        }

        let mut clicks = Vec::new();
        for (index, item) in &inner.nav_items {
            let index = *index;
            let click_inner = Rc::clone(&inner);
            let callback = Closure::wrap(
                Box::new(move |_event: Event| click_inner.click(index)) as Box<dyn FnMut(_)>
            );
            item.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
            clicks.push((item.clone(), callback));
        }
        for (index, toggle) in &inner.toggles {
            let index = *index;
            let toggle_inner = Rc::clone(&inner);
            let callback = Closure::wrap(
                Box::new(move |_event: Event| toggle_inner.toggle(index)) as Box<dyn FnMut(_)>
            );
            toggle.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
            clicks.push((toggle.clone(), callback));
        }

        let hidden = HiddenSections::load(inner.store.as_ref());
        for (index, _) in &inner.toggles {
            inner.show_hidden(*index, hidden.is_hidden(*index));
        }

        tracing::debug!(
            path = %path,
            sections = inner.navigation.borrow().anchors().len(),
            "Mounted page binding"
        );

        Ok(Self {
            inner,
            scroll,
            observer,
            _observer_callback: observer_callback,
            clicks,
        })
    }

    /// Index of the highlighted section.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.inner.navigation.borrow().active()
    }
}

impl Drop for PageBinding {
    fn drop(&mut self) {
        self.inner.navigation.borrow_mut().unmount();
        self.inner.cancel_timeout();
        self.inner.timer.borrow_mut().take();

        remove_listener(self.inner.window.as_ref(), "scroll", &self.scroll);
        self.observer.disconnect();
        for (element, callback) in &self.clicks {
            remove_listener(element.as_ref(), "click", callback);
        }
    }
}

fn remove_listener(target: &EventTarget, name: &str, callback: &EventClosure) {
    if let Err(e) = target.remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
    {
        tracing::warn!(event = name, error = ?e, "Failed to remove listener");
    }
}
