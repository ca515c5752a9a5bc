use crate::Node;

/// The queue of arena nodes that are not holding a payload.
///
/// Nodes are handed out from the head and returned to the tail, so a released node is only
/// reused after every node that was already waiting. The links themselves live in the nodes,
/// this only tracks the ends of the queue and its length.
#[derive(Debug)]
pub(crate) struct FreeChain {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl FreeChain {
    /// Creates a chain that covers a freshly built arena of `capacity` nodes, where node `i`
    /// links to node `i + 1`.
    #[must_use]
    pub(crate) fn covering(capacity: usize) -> Self {
        Self {
            head: (capacity > 0).then_some(0),
            tail: capacity.checked_sub(1),
            len: capacity,
        }
    }

    #[must_use]
    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    #[must_use]
    pub(crate) fn tail(&self) -> Option<usize> {
        self.tail
    }

    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Only used for integrity checks and reporting.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Dequeues the node at the head of the chain, returning its index, or `None` if every
    /// node is in use. The node stays in the free state; the caller activates it.
    #[must_use]
    pub(crate) fn acquire<T: ?Sized>(&mut self, nodes: &[Node<'_, T>]) -> Option<usize> {
        let index = self.head?;

        let node = nodes
            .get(index)
            .expect("free chain only ever refers to nodes within the arena");

        self.head = node.next();

        if self.head.is_none() {
            self.tail = None;
        }

        self.len = self
            .len
            .checked_sub(1)
            .expect("we just dequeued a node so the chain cannot have been empty");

        Some(index)
    }

    /// Clears the payload and links of an active node and enqueues it at the tail of the chain.
    ///
    /// The node must already be unlinked from the active chain by the caller. Returns the
    /// payload the node held.
    #[must_use]
    pub(crate) fn release<'a, T: ?Sized>(
        &mut self,
        nodes: &mut [Node<'a, T>],
        index: usize,
    ) -> &'a T {
        let payload = nodes
            .get_mut(index)
            .expect("released node index must be within the arena")
            .deactivate();

        match self.tail {
            Some(tail) => nodes
                .get_mut(tail)
                .expect("free chain only ever refers to nodes within the arena")
                .set_next(Some(index)),
            None => self.head = Some(index),
        }

        self.tail = Some(index);

        self.len = self
            .len
            .checked_add(1)
            .expect("guarded by the arena never holding more than usize::MAX nodes");

        payload
    }
}
