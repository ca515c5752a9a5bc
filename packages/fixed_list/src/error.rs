use thiserror::Error;

/// Errors that can occur when inserting into a [`FixedList`][crate::FixedList].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Every node of the list is already holding an item. The list was left unchanged and the
    /// insertion may be retried after an item has been removed.
    #[error("list is full: all {capacity} nodes are in use")]
    Full {
        /// The fixed number of items the list can hold.
        capacity: usize,
    },
}

/// A specialized `Result` type for list operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug, Copy);

    #[test]
    fn full_is_error() {
        let error = Error::Full { capacity: 3 };

        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }

    #[test]
    fn full_names_capacity() {
        let error = Error::Full { capacity: 100 };

        assert_eq!(error.to_string(), "list is full: all 100 nodes are in use");
    }
}
