use std::marker::PhantomData;

use crate::{DropPolicy, FixedList};

/// Builder for creating an instance of [`FixedList`].
///
/// You only need to use this builder if you want to customize the list configuration.
/// The default configuration used by [`FixedList::new()`][1] is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use fixed_list::{DropPolicy, FixedList};
///
/// let list = FixedList::<u32, 16>::builder()
///     .name("pending_requests")
///     .drop_policy(DropPolicy::MayDropItems)
///     .build();
/// ```
///
/// [1]: FixedList::new
#[must_use]
pub struct FixedListBuilder<T: ?Sized, const CAPACITY: usize> {
    name: &'static str,
    drop_policy: DropPolicy,

    _item: PhantomData<T>,
}

impl<T: ?Sized, const CAPACITY: usize> std::fmt::Debug for FixedListBuilder<T, CAPACITY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedListBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("capacity", &CAPACITY)
            .field("name", &self.name)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}

/// The name used in diagnostic events of lists that were not given one.
pub(crate) const DEFAULT_NAME: &str = "fixed_list";

impl<T: ?Sized, const CAPACITY: usize> FixedListBuilder<T, CAPACITY> {
    pub(crate) fn new() -> Self {
        Self {
            name: DEFAULT_NAME,
            drop_policy: DropPolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the name that identifies the list in the `tracing` events it emits.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::FixedList;
    ///
    /// let list = FixedList::<u32, 4>::builder().name("retry_queue").build();
    /// assert_eq!(list.name(), "retry_queue");
    /// ```
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the [drop policy][DropPolicy] for the list. This governs how
    /// to treat remaining items in the list when the list is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_list::{DropPolicy, FixedList};
    ///
    /// let list = FixedList::<u32, 4>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the list with the specified configuration.
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
    /// let list = FixedList::<u32, 4>::builder().build();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn build<'a>(self) -> FixedList<'a, T, CAPACITY> {
        FixedList::new_inner(self.name, self.drop_policy)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let list = FixedList::<u32, 2>::builder().build();

        assert_eq!(list.name(), DEFAULT_NAME);
        assert_eq!(list.drop_policy(), DropPolicy::MayDropItems);
        assert_eq!(list.capacity(), 2);
    }

    #[test]
    fn configured() {
        let list = FixedList::<str, 2>::builder()
            .name("names")
            .drop_policy(DropPolicy::MustNotDropItems)
            .build();

        assert_eq!(list.name(), "names");
        assert_eq!(list.drop_policy(), DropPolicy::MustNotDropItems);
    }

    #[test]
    fn debug_names_item_type_and_capacity() {
        let builder = FixedList::<u64, 5>::builder().name("debugged");

        let output = format!("{builder:?}");

        assert!(output.contains("u64"));
        assert!(output.contains("capacity: 5"));
        assert!(output.contains("debugged"));
    }
}
