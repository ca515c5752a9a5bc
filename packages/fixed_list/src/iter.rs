use std::fmt;
use std::iter::FusedIterator;

use crate::FixedList;

/// Iterator over the items of a [`FixedList`], front to back.
///
/// Created by [`FixedList::iter()`]. Can also be walked from the back, and the two ends may be
/// mixed; each item is yielded once.
pub struct Iter<'l, 'a, T: ?Sized, const CAPACITY: usize> {
    list: &'l FixedList<'a, T, CAPACITY>,

    front: Option<usize>,
    back: Option<usize>,

    /// Items not yet yielded from either end. The two cursors cross over once this reaches zero.
    remaining: usize,
}

impl<'l, 'a, T: ?Sized, const CAPACITY: usize> Iter<'l, 'a, T, CAPACITY> {
    pub(crate) fn new(
        list: &'l FixedList<'a, T, CAPACITY>,
        front: Option<usize>,
        back: Option<usize>,
        remaining: usize,
    ) -> Self {
        Self {
            list,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T: ?Sized, const CAPACITY: usize> Iterator for Iter<'_, 'a, T, CAPACITY> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.front?);

        self.front = node.next();
        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("guarded by the zero check above");

        Some(node.payload())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: ?Sized, const CAPACITY: usize> DoubleEndedIterator for Iter<'_, '_, T, CAPACITY> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.back?);

        self.back = node.prev();
        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("guarded by the zero check above");

        Some(node.payload())
    }
}

impl<T: ?Sized, const CAPACITY: usize> ExactSizeIterator for Iter<'_, '_, T, CAPACITY> {}

impl<T: ?Sized, const CAPACITY: usize> FusedIterator for Iter<'_, '_, T, CAPACITY> {}

impl<T: ?Sized, const CAPACITY: usize> Clone for Iter<'_, '_, T, CAPACITY> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: ?Sized + fmt::Debug, const CAPACITY: usize> fmt::Debug for Iter<'_, '_, T, CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
