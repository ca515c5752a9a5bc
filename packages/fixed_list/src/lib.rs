#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A fixed-capacity doubly-linked list of borrowed items that never allocates after construction.
//!
//! This crate provides [`FixedList`], a list whose nodes are all created up front, inline in the
//! list value. Inserting an item moves a node from a queue of free nodes into the list and
//! removing an item moves it back, so the memory used by the list is decided entirely by its
//! `CAPACITY` and never changes afterwards. This makes it suitable for code that must not touch
//! the heap once it is running, such as real-time loops or memory-budgeted services.
//!
//! # Key Features
//!
//! - **No allocation**: every operation works within the nodes created at construction
//! - **Both ends**: O(1) [`append()`](FixedList::append), [`push()`](FixedList::push),
//!   [`pop()`](FixedList::pop), [`pop_tail()`](FixedList::pop_tail) and
//!   [`peek()`](FixedList::peek)
//! - **Removal by identity**: [`remove()`](FixedList::remove) takes out the exact reference that
//!   was inserted, even when other items compare equal to it
//! - **Borrowed items**: the list holds `&T` for any `T`, including `str` and trait objects, and
//!   the borrow checker keeps the items alive for as long as the list holds them
//! - **Explicit fullness**: inserting into a full list returns [`Error::Full`] and changes nothing
//! - **Diagnostics**: operations emit `tracing` events tagged with a configurable list name
//!
//! # Example
//!
//! ```rust
//! use fixed_list::{Error, FixedList};
//!
//! let (a, b, c, d) = ("a", "b", "c", "d");
//! let mut list = FixedList::<str, 3>::new();
//!
//! list.append(a).unwrap();
//! list.append(b).unwrap();
//! list.append(c).unwrap();
//! assert_eq!(list.append(d), Err(Error::Full { capacity: 3 }));
//!
//! assert_eq!(list.pop(), Some("a"));
//! assert_eq!(list.peek(), Some("b"));
//! assert_eq!(list.pop_tail(), Some("c"));
//! assert_eq!(list.len(), 1);
//!
//! // The slot freed by the removals is reused.
//! list.append(d).unwrap();
//! assert_eq!(list.iter().collect::<Vec<_>>(), ["b", "d"]);
//! ```
//!
//! # Diagnostics
//!
//! Each mutating operation emits a `tracing` event at the `TRACE` level carrying the list name,
//! the arena index of the affected node and the resulting length. Rejected insertions are
//! reported at the `DEBUG` level. Install a subscriber to see them, or use the level features of
//! the `tracing` crate to compile them out. The list behaves the same either way.

mod builder;
mod drop_policy;
mod error;
mod free_chain;
mod iter;
mod list;
mod node;

pub use builder::FixedListBuilder;
pub use drop_policy::DropPolicy;
pub use error::{Error, Result};
pub(crate) use free_chain::FreeChain;
pub use iter::Iter;
pub use list::FixedList;
pub(crate) use node::Node;
