//! Shared, ordered collection of section anchors.

use std::cell::RefCell;
use std::rc::Rc;

/// Ordered section anchors, indexed by section position.
///
/// The content renderer writes one anchor per section on each render pass;
/// the side navigation reads them. Both run on the same single-threaded event
/// loop, so the registry is a cheap `Rc<RefCell<_>>` handle: clones share the
/// same slots.
///
/// A slot is `None` until its anchor is mounted. Readers skip empty slots.
#[derive(Debug)]
pub struct AnchorRegistry<A> {
    slots: Rc<RefCell<Vec<Option<A>>>>,
}

impl<A> Clone for AnchorRegistry<A> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<A> Default for AnchorRegistry<A> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<A> AnchorRegistry<A> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the anchor for section `index`, growing the registry if needed.
    pub fn register(&self, index: usize, anchor: A) {
        let mut slots = self.slots.borrow_mut();
        if slots.len() <= index {
            slots.resize_with(index + 1, || None);
        }
        slots[index] = Some(anchor);
    }

    /// Clear the anchor for section `index` (the section was unmounted).
    pub fn unregister(&self, index: usize) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(index) {
            *slot = None;
        }
    }

    /// Drop slots at and beyond `len`.
    ///
    /// Called at the end of a render pass so anchors of sections that no
    /// longer exist are not observed.
    pub fn truncate(&self, len: usize) {
        self.slots.borrow_mut().truncate(len);
    }

    /// Number of slots, mounted or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// True when no slots exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// True when section `index` has a mounted anchor.
    #[must_use]
    pub fn is_mounted(&self, index: usize) -> bool {
        self.slots.borrow().get(index).is_some_and(Option::is_some)
    }
}

impl<A: Clone> AnchorRegistry<A> {
    /// The anchor for section `index`, if mounted.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<A> {
        self.slots.borrow().get(index).cloned().flatten()
    }

    /// Mounted anchors with their section index, in order.
    #[must_use]
    pub fn mounted(&self) -> Vec<(usize, A)> {
        self.slots
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.clone().map(|anchor| (i, anchor)))
            .collect()
    }
}

impl<A: PartialEq> AnchorRegistry<A> {
    /// Section index of `anchor`, if registered.
    #[must_use]
    pub fn position(&self, anchor: &A) -> Option<usize> {
        self.slots
            .borrow()
            .iter()
            .position(|slot| slot.as_ref() == Some(anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_grows_with_gaps() {
        let registry = AnchorRegistry::new();
        registry.register(2, "c");

        assert_eq!(registry.len(), 3);
        assert!(!registry.is_mounted(0));
        assert!(registry.is_mounted(2));
        assert_eq!(registry.get(2), Some("c"));
        assert_eq!(registry.get(0), None);
        assert_eq!(registry.get(9), None);
    }

    #[test]
    fn test_clones_share_slots() {
        let writer = AnchorRegistry::new();
        let reader = writer.clone();

        writer.register(0, "a");

        assert_eq!(reader.get(0), Some("a"));
    }

    #[test]
    fn test_mounted_skips_empty_slots() {
        let registry = AnchorRegistry::new();
        registry.register(0, "a");
        registry.register(2, "c");

        assert_eq!(registry.mounted(), vec![(0, "a"), (2, "c")]);
    }

    #[test]
    fn test_unregister_and_truncate() {
        let registry = AnchorRegistry::new();
        for (i, a) in ["a", "b", "c"].into_iter().enumerate() {
            registry.register(i, a);
        }

        registry.unregister(1);
        assert!(!registry.is_mounted(1));

        registry.truncate(1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(2), None);

        // Out of range is a no-op.
        registry.unregister(7);
    }

    #[test]
    fn test_position() {
        let registry = AnchorRegistry::new();
        registry.register(0, "a");
        registry.register(1, "b");

        assert_eq!(registry.position(&"b"), Some(1));
        assert_eq!(registry.position(&"z"), None);
    }
}
