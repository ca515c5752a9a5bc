/// Determines how a list treats items it still holds when the list is dropped.
///
/// The list only borrows its items, so dropping it never drops the items themselves. By default,
/// the borrowed references are simply let go of.
///
/// # Examples
///
/// ```
/// use fixed_list::{DropPolicy, FixedList};
///
/// // The drop policy is set at list creation time.
/// let list = FixedList::<u32, 8>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The list may be dropped while it still holds items. This is the default.
    #[default]
    MayDropItems,

    /// The list will panic if it still holds items when it is dropped.
    ///
    /// This may be valuable if the list is used to track work that must be drained before
    /// shutdown, for example a queue of requests that each need an explicit completion.
    MustNotDropItems,
}
