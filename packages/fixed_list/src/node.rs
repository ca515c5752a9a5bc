use std::any::type_name;
use std::mem;

/// One slot of the arena that backs a `FixedList`.
///
/// The index of a node is assigned when the arena is built and never changes. Which chain the
/// node is on is encoded in its [`Slot`], so a free node cannot carry a payload or a backward link.
#[derive(Debug)]
pub(crate) struct Node<'a, T: ?Sized> {
    index: usize,
    slot: Slot<'a, T>,
}

#[derive(Debug)]
enum Slot<'a, T: ?Sized> {
    /// On the free chain, which is a singly-linked FIFO queue.
    Free { next: Option<usize> },

    /// On the active chain, which is doubly linked and holds the list in order.
    Active {
        payload: &'a T,
        prev: Option<usize>,
        next: Option<usize>,
    },
}

impl<'a, T: ?Sized> Node<'a, T> {
    #[must_use]
    pub(crate) fn free(index: usize, next: Option<usize>) -> Self {
        Self {
            index,
            slot: Slot::Free { next },
        }
    }

    #[must_use]
    #[cfg(any(debug_assertions, test))]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub(crate) fn is_active(&self) -> bool {
        matches!(self.slot, Slot::Active { .. })
    }

    /// The forward link within whichever chain currently holds the node.
    #[must_use]
    pub(crate) fn next(&self) -> Option<usize> {
        match self.slot {
            Slot::Free { next } | Slot::Active { next, .. } => next,
        }
    }

    /// The backward link. Free nodes never have one.
    #[must_use]
    pub(crate) fn prev(&self) -> Option<usize> {
        match self.slot {
            Slot::Free { .. } => None,
            Slot::Active { prev, .. } => prev,
        }
    }

    pub(crate) fn set_next(&mut self, index: Option<usize>) {
        match &mut self.slot {
            Slot::Free { next } | Slot::Active { next, .. } => *next = index,
        }
    }

    /// # Panics
    ///
    /// Panics if the node is on the free chain.
    pub(crate) fn set_prev(&mut self, index: Option<usize>) {
        match &mut self.slot {
            Slot::Active { prev, .. } => *prev = index,
            Slot::Free { .. } => panic!(
                "node {} is free and cannot take a backward link in list of {}",
                self.index,
                type_name::<T>()
            ),
        }
    }

    /// # Panics
    ///
    /// Panics if the node is on the free chain.
    #[must_use]
    pub(crate) fn payload(&self) -> &'a T {
        match self.slot {
            Slot::Active { payload, .. } => payload,
            Slot::Free { .. } => panic!(
                "node {} is free and holds no payload in list of {}",
                self.index,
                type_name::<T>()
            ),
        }
    }

    /// Moves a free node onto the active chain with the given payload and links.
    ///
    /// # Panics
    ///
    /// Panics if the node is already active.
    pub(crate) fn activate(&mut self, payload: &'a T, prev: Option<usize>, next: Option<usize>) {
        let previous = mem::replace(
            &mut self.slot,
            Slot::Active {
                payload,
                prev,
                next,
            },
        );

        assert!(
            matches!(previous, Slot::Free { .. }),
            "node {} was already active when activated in list of {}",
            self.index,
            type_name::<T>()
        );
    }

    /// Turns an active node into an unlinked free node, returning the payload it held.
    ///
    /// # Panics
    ///
    /// Panics if the node is already free.
    #[must_use]
    pub(crate) fn deactivate(&mut self) -> &'a T {
        match mem::replace(&mut self.slot, Slot::Free { next: None }) {
            Slot::Active { payload, .. } => payload,
            Slot::Free { .. } => panic!(
                "node {} was already free when deactivated in list of {}",
                self.index,
                type_name::<T>()
            ),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn free_node_has_no_backward_link() {
        let node = Node::<u32>::free(4, Some(5));

        assert_eq!(node.index(), 4);
        assert!(!node.is_active());
        assert_eq!(node.next(), Some(5));
        assert_eq!(node.prev(), None);
    }

    #[test]
    fn activate_then_deactivate() {
        let value = 42_u32;
        let mut node = Node::free(0, Some(1));

        node.activate(&value, Some(7), Some(8));

        assert!(node.is_active());
        assert_eq!(node.prev(), Some(7));
        assert_eq!(node.next(), Some(8));
        assert!(std::ptr::eq(node.payload(), &value));

        let payload = node.deactivate();

        assert!(std::ptr::eq(payload, &value));
        assert!(!node.is_active());
        assert_eq!(node.next(), None);
        assert_eq!(node.prev(), None);
        assert_eq!(node.index(), 0);
    }

    #[test]
    fn set_links_on_active_node() {
        let value = "payload";
        let mut node = Node::<str>::free(2, None);
        node.activate(value, None, None);

        node.set_prev(Some(1));
        node.set_next(Some(3));

        assert_eq!(node.prev(), Some(1));
        assert_eq!(node.next(), Some(3));
    }

    #[test]
    fn set_next_on_free_node() {
        let mut node = Node::<u32>::free(2, None);

        node.set_next(Some(9));

        assert_eq!(node.next(), Some(9));
    }

    #[test]
    #[should_panic]
    fn set_prev_on_free_node_panics() {
        let mut node = Node::<u32>::free(0, None);
        node.set_prev(Some(1));
    }

    #[test]
    #[should_panic]
    fn payload_of_free_node_panics() {
        let node = Node::<u32>::free(0, None);
        _ = node.payload();
    }

    #[test]
    #[should_panic]
    fn double_activate_panics() {
        let value = 1_u32;
        let mut node = Node::free(0, None);

        node.activate(&value, None, None);
        node.activate(&value, None, None);
    }

    #[test]
    #[should_panic]
    fn deactivate_free_node_panics() {
        let mut node = Node::<u32>::free(0, None);
        _ = node.deactivate();
    }
}
