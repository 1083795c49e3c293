//! Singly-linked list with a sentinel head, positional cursors, and O(1)
//! length.
//!
//! [`ForwardList`] owns a chain of individually boxed nodes rooted at a link
//! embedded in the list itself. That embedded link is the *before-front*
//! position: it makes "insert after" and "remove after" uniform across the
//! whole chain, so the head slot needs no special-cased operations and an
//! element can be spliced in or out anywhere in O(1) given a cursor.
//!
//! Positions are handled by two cursor types:
//!
//! - [`Cursor`]: a copyable read-only handle. It can sit before the front,
//!   at a node, or at the end, and the two flavors compare equal whenever
//!   they designate the same position.
//! - [`CursorMut`]: additionally splices via [`CursorMut::insert_after`] and
//!   [`CursorMut::remove_after`], including at the before-front position.
//!
//! Lists compare element-wise ([`PartialEq`]) and order lexicographically
//! ([`PartialOrd`]/[`Ord`]); `clone_from` builds the whole copy before
//! adopting it, so a panicking element clone leaves the destination
//! unchanged.
//!
//! # Example
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([2, 3]);
//! list.push_front(1);
//! assert_eq!(list.len(), 3);
//!
//! // Splice after the first element through a cursor.
//! let mut cursor = list.cursor_front_mut();
//! cursor.insert_after(99);
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 99, 2, 3]);
//!
//! assert_eq!(list.pop_front(), Some(1));
//! assert!(list < ForwardList::from([100]));
//! ```

#![warn(missing_docs)]

pub mod cursor;
pub mod iter;
pub mod list;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;
