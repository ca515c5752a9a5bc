use std::any::type_name;
use std::{array, fmt, iter, ptr, thread};

use tracing::{debug, trace};

use crate::builder::DEFAULT_NAME;
use crate::{DropPolicy, Error, FixedListBuilder, FreeChain, Iter, Node, Result};

/// A doubly-linked list of borrowed items with a fixed capacity of `CAPACITY` items.
///
/// All the nodes of the list are created up front, inline in the list value, so the list never
/// allocates memory. Inserting an item takes a node from a queue of free nodes and links it into
/// the list; removing an item unlinks its node and returns it to the back of that queue. When no
/// free node remains, insertion fails with [`Error::Full`] and the list is left unchanged.
///
/// The list holds `&'a T` references and never looks inside the items. The caller owns the items
/// and the borrow checker ensures they outlive the list's hold on them. Items are identified by
/// reference, not by value: [`remove()`][1] and [`contains()`][2] only match the exact reference
/// that was inserted, even if other items compare equal to it.
///
/// | Operation | Cost |
/// |---|---|
/// | [`append()`][3], [`push()`][4], [`pop()`][5], [`pop_tail()`][6], [`peek()`][7] | O(1) |
/// | [`remove()`][1], [`contains()`][2] | O(len) |
///
/// # Examples
///
/// ```
/// use fixed_list::FixedList;
///
/// let (a, b, c) = (1, 2, 3);
/// let mut list = FixedList::<i32, 3>::new();
///
/// list.append(&b).unwrap();
/// list.append(&c).unwrap();
/// list.push(&a).unwrap();
/// assert!(list.is_full());
///
/// assert_eq!(list.pop(), Some(&1));
/// assert_eq!(list.pop_tail(), Some(&3));
/// assert_eq!(list.peek(), Some(&2));
/// assert_eq!(list.len(), 1);
/// ```
///
/// # Item lifetimes
///
/// The list checks its [drop policy][DropPolicy] when it is dropped, so it has a `Drop`
/// implementation regardless of the policy chosen. The borrow checker therefore requires every
/// item to be declared before the list, so that the items are dropped after it:
///
/// ```
/// use fixed_list::FixedList;
///
/// let item = 1;
/// let mut list = FixedList::<i32, 1>::new();
/// list.append(&item).unwrap();
/// ```
///
/// Declaring the item after the list does not compile, even with the default policy:
///
/// ```compile_fail
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 1>::new();
/// let item = 1;
/// list.append(&item).unwrap();
/// ```
///
/// # Thread safety
///
/// The list performs no synchronization of its own. It can be moved or shared between threads
/// whenever `&T` can; mutation requires exclusive access, so concurrent writers need to wrap the
/// list in a `Mutex` or similar.
///
/// [1]: Self::remove
/// [2]: Self::contains
/// [3]: Self::append
/// [4]: Self::push
/// [5]: Self::pop
/// [6]: Self::pop_tail
/// [7]: Self::peek
pub struct FixedList<'a, T: ?Sized, const CAPACITY: usize> {
    /// Every node the list will ever use. Each one is on either the free chain or the active
    /// chain, never both, and the links between nodes are indices into this array.
    nodes: [Node<'a, T>; CAPACITY],

    free: FreeChain,

    head: Option<usize>,
    tail: Option<usize>,

    /// Number of nodes on the active chain.
    len: usize,

    name: &'static str,
    drop_policy: DropPolicy,
}

impl<'a, T: ?Sized, const CAPACITY: usize> FixedList<'a, T, CAPACITY> {
    /// Creates an empty list with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `CAPACITY` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let list = FixedList::<str, 10>::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(DEFAULT_NAME, DropPolicy::default())
    }

    /// Starts building a list with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let list = FixedList::<u8, 2>::builder().name("bytes").build();
    /// ```
    pub fn builder() -> FixedListBuilder<T, CAPACITY> {
        FixedListBuilder::new()
    }

    #[must_use]
    pub(crate) fn new_inner(name: &'static str, drop_policy: DropPolicy) -> Self {
        assert!(CAPACITY > 0, "FixedList must have non-zero capacity");

        // All nodes start on the free chain, linked in index order.
        let nodes = array::from_fn(|index| {
            Node::free(
                index,
                index.checked_add(1).filter(|next| *next < CAPACITY),
            )
        });

        trace!(list = name, capacity = CAPACITY, "initialized");

        Self {
            nodes,
            free: FreeChain::covering(CAPACITY),
            head: None,
            tail: None,
            len: 0,
            name,
            drop_policy,
        }
    }

    /// The name that identifies the list in diagnostic events.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The [drop policy][DropPolicy] the list was built with.
    #[must_use]
    pub fn drop_policy(&self) -> DropPolicy {
        self.drop_policy
    }

    /// The number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every node is in use, meaning the next insertion will fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// The fixed number of items the list can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Adds an item to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Full`] if every node is in use. The list is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::{Error, FixedList};
    ///
    /// let (a, b) = ("a", "b");
    /// let mut list = FixedList::<str, 1>::new();
    ///
    /// assert_eq!(list.append(a), Ok(()));
    /// assert_eq!(list.append(b), Err(Error::Full { capacity: 1 }));
    /// ```
    pub fn append(&mut self, payload: &'a T) -> Result<()> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let Some(index) = self.free.acquire(&self.nodes) else {
            debug!(list = self.name, capacity = CAPACITY, "append rejected, list is full");
            return Err(Error::Full { capacity: CAPACITY });
        };

        let previous_tail = self.tail;
        self.node_mut(index).activate(payload, previous_tail, None);

        match previous_tail {
            Some(tail) => self.node_mut(tail).set_next(Some(index)),
            None => self.head = Some(index),
        }

        self.tail = Some(index);
        self.increment_len();

        trace!(list = self.name, index, len = self.len, "append");

        Ok(())
    }

    /// Adds an item to the front of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Full`] if every node is in use. The list is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let (a, b) = (1, 2);
    /// let mut list = FixedList::<i32, 2>::new();
    ///
    /// list.push(&a).unwrap();
    /// list.push(&b).unwrap();
    /// assert_eq!(list.peek(), Some(&2));
    /// ```
    pub fn push(&mut self, payload: &'a T) -> Result<()> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let Some(index) = self.free.acquire(&self.nodes) else {
            debug!(list = self.name, capacity = CAPACITY, "push rejected, list is full");
            return Err(Error::Full { capacity: CAPACITY });
        };

        let previous_head = self.head;
        self.node_mut(index).activate(payload, None, previous_head);

        match previous_head {
            Some(head) => self.node_mut(head).set_prev(Some(index)),
            None => self.tail = Some(index),
        }

        self.head = Some(index);
        self.increment_len();

        trace!(list = self.name, index, len = self.len, "push");

        Ok(())
    }

    /// Removes and returns the item at the front of the list, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let (a, b) = (1, 2);
    /// let mut list = FixedList::<i32, 2>::new();
    /// list.append(&a).unwrap();
    /// list.append(&b).unwrap();
    ///
    /// assert_eq!(list.pop(), Some(&1));
    /// assert_eq!(list.pop(), Some(&2));
    /// assert_eq!(list.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<&'a T> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let index = self.head?;
        let payload = self.detach(index);

        trace!(list = self.name, index, len = self.len, "pop");

        Some(payload)
    }

    /// Removes and returns the item at the end of the list, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let (a, b) = (1, 2);
    /// let mut list = FixedList::<i32, 2>::new();
    /// list.append(&a).unwrap();
    /// list.append(&b).unwrap();
    ///
    /// assert_eq!(list.pop_tail(), Some(&2));
    /// assert_eq!(list.pop_tail(), Some(&1));
    /// assert_eq!(list.pop_tail(), None);
    /// ```
    pub fn pop_tail(&mut self) -> Option<&'a T> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let index = self.tail?;
        let payload = self.detach(index);

        trace!(list = self.name, index, len = self.len, "pop_tail");

        Some(payload)
    }

    /// Removes the first occurrence of `target` from the list and returns it, or `None` if the
    /// list does not hold it.
    ///
    /// Items are matched by the address they live at, not by value. An item that merely compares equal
    /// to `target` is not removed. If the same reference was inserted more than once, only the
    /// occurrence closest to the front is removed.
    ///
    /// `None` is also what an empty list returns; use [`contains()`][1] first if you need to tell
    /// the two apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let first = 5;
    /// let second = 5;
    /// let mut list = FixedList::<i32, 2>::new();
    /// list.append(&first).unwrap();
    /// list.append(&second).unwrap();
    ///
    /// // Removes `second` even though `first` is equal to it and comes first.
    /// let removed = list.remove(&second).unwrap();
    /// assert!(std::ptr::eq(removed, &second));
    /// assert!(std::ptr::eq(list.peek().unwrap(), &first));
    /// ```
    ///
    /// [1]: Self::contains
    pub fn remove(&mut self, target: &T) -> Option<&'a T> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let Some(index) = self.position(target) else {
            trace!(list = self.name, len = self.len, "remove found no match");
            return None;
        };

        let payload = self.detach(index);

        trace!(list = self.name, index, len = self.len, "remove");

        Some(payload)
    }

    /// Returns the item at the front of the list without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a T> {
        self.head.map(|index| self.node(index).payload())
    }

    /// Returns the item at the end of the list without removing it.
    #[must_use]
    pub fn peek_tail(&self) -> Option<&'a T> {
        self.tail.map(|index| self.node(index).payload())
    }

    /// Whether the list holds `target`, compared by reference identity like [`remove()`][1].
    ///
    /// [1]: Self::remove
    #[must_use]
    pub fn contains(&self, target: &T) -> bool {
        self.position(target).is_some()
    }

    /// Removes every item from the list, returning all nodes to the free queue front to back.
    pub fn clear(&mut self) {
        #[cfg(debug_assertions)]
        self.integrity_check();

        while let Some(index) = self.head {
            _ = self.detach(index);
        }

        trace!(list = self.name, "clear");
    }

    /// Iterates over the items from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let (a, b, c) = ('a', 'b', 'c');
    /// let mut list = FixedList::<char, 3>::new();
    /// list.append(&b).unwrap();
    /// list.append(&c).unwrap();
    /// list.push(&a).unwrap();
    ///
    /// let forward: String = list.iter().collect();
    /// let backward: String = list.iter().rev().collect();
    /// assert_eq!(forward, "abc");
    /// assert_eq!(backward, "cba");
    /// ```
    pub fn iter(&self) -> Iter<'_, 'a, T, CAPACITY> {
        Iter::new(self, self.head, self.tail, self.len)
    }

    pub(crate) fn node(&self, index: usize) -> &Node<'a, T> {
        self.nodes.get(index).unwrap_or_else(|| {
            panic!(
                "node {index} index out of bounds in list of {}",
                type_name::<T>()
            )
        })
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<'a, T> {
        self.nodes.get_mut(index).unwrap_or_else(|| {
            panic!(
                "node {index} index out of bounds in list of {}",
                type_name::<T>()
            )
        })
    }

    fn increment_len(&mut self) {
        self.len = self
            .len
            .checked_add(1)
            .expect("guarded by the free chain never handing out more than CAPACITY nodes");
    }

    /// Indices of the active nodes, front to back.
    fn active_indices(&self) -> impl Iterator<Item = usize> {
        iter::successors(self.head, |index| self.node(*index).next()).take(self.len)
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.active_indices()
            .find(|index| ptr::addr_eq(self.node(*index).payload(), target))
    }

    /// Unlinks an active node from wherever it sits in the active chain and returns it to the
    /// free chain, yielding the payload it held.
    fn detach(&mut self, index: usize) -> &'a T {
        let node = self.node(index);
        let prev = node.prev();
        let next = node.next();

        match prev {
            Some(prev) => self.node_mut(prev).set_next(next),
            None => self.head = next,
        }

        match next {
            Some(next) => self.node_mut(next).set_prev(prev),
            None => self.tail = prev,
        }

        self.len = self
            .len
            .checked_sub(1)
            .expect("we are detaching an active node so the list cannot have been empty");

        self.free.release(&mut self.nodes, index)
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(any(debug_assertions, test))]
    pub(crate) fn integrity_check(&self) {
        let mut active_count: usize = 0;
        let mut previous = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            assert!(
                active_count < CAPACITY,
                "active chain is longer than the arena (cycle?) in list of {}",
                type_name::<T>()
            );

            let node = self.node(index);

            assert!(
                node.index() == index,
                "node at arena position {index} claims index {} in list of {}",
                node.index(),
                type_name::<T>()
            );
            assert!(
                node.is_active(),
                "node {index} is on the active chain but is free in list of {}",
                type_name::<T>()
            );
            assert!(
                node.prev() == previous,
                "node {index} links back to {:?} instead of {previous:?} in list of {}",
                node.prev(),
                type_name::<T>()
            );

            previous = Some(index);
            cursor = node.next();
            active_count = active_count
                .checked_add(1)
                .expect("guarded by the cycle assertion above");
        }

        assert!(
            self.tail == previous,
            "tail {:?} is not the last node {previous:?} of the active chain in list of {}",
            self.tail,
            type_name::<T>()
        );
        assert!(
            self.len == active_count,
            "self.len {} does not match the observed active count {active_count} in list of {}",
            self.len,
            type_name::<T>()
        );

        let mut free_count: usize = 0;
        let mut last_free = None;
        let mut cursor = self.free.head();

        while let Some(index) = cursor {
            assert!(
                free_count < CAPACITY,
                "free chain is longer than the arena (cycle?) in list of {}",
                type_name::<T>()
            );

            let node = self.node(index);

            assert!(
                node.index() == index,
                "node at arena position {index} claims index {} in list of {}",
                node.index(),
                type_name::<T>()
            );
            assert!(
                !node.is_active(),
                "node {index} is on the free chain but is active in list of {}",
                type_name::<T>()
            );

            last_free = Some(index);
            cursor = node.next();
            free_count = free_count
                .checked_add(1)
                .expect("guarded by the cycle assertion above");
        }

        assert!(
            self.free.tail() == last_free,
            "free tail {:?} is not the last free node {last_free:?} in list of {}",
            self.free.tail(),
            type_name::<T>()
        );
        assert!(
            self.free.len() == free_count,
            "free chain length {} does not match the observed free count {free_count} in list of {}",
            self.free.len(),
            type_name::<T>()
        );

        // Both walks only visit nodes of their own state and neither revisits a node, so if the
        // counts add up then every node is on exactly one chain.
        assert!(
            active_count.checked_add(free_count) == Some(CAPACITY),
            "{active_count} active and {free_count} free nodes do not add up to capacity {CAPACITY} in list of {}",
            type_name::<T>()
        );
    }
}

impl<T: ?Sized, const CAPACITY: usize> Default for FixedList<'_, T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'l, 'a, T: ?Sized, const CAPACITY: usize> IntoIterator for &'l FixedList<'a, T, CAPACITY> {
    type Item = &'a T;
    type IntoIter = Iter<'l, 'a, T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ?Sized + fmt::Debug, const CAPACITY: usize> fmt::Debug for FixedList<'_, T, CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedList")
            .field("name", &self.name)
            .field("capacity", &CAPACITY)
            .field("len", &self.len)
            .field("items", &self.iter())
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, const CAPACITY: usize> Drop for FixedList<'_, T, CAPACITY> {
    fn drop(&mut self) {
        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was, leading to debug difficulties.
        if self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking() {
            assert!(
                self.is_empty(),
                "dropped a non-empty list of {} with a policy that says it must be empty when dropped",
                type_name::<T>()
            );
        }
    }
}
