//! Positional cursors over [`ForwardList`].
//!
//! A cursor designates one of three positions in a list: *before the front*
//! (the sentinel embedded in the list), *at* a real node, or the *end* past
//! the last node. [`Cursor`] is a copyable read-only handle; [`CursorMut`]
//! borrows the list exclusively and can splice elements in and out after its
//! position.
//!
//! Insertion and removal operate on the slot *after* the cursor. In a
//! singly-linked chain that is the O(1) direction, and together with the
//! before-front position it covers the head slot with the same two methods:
//! `insert_after` there is `push_front`, `remove_after` there is `pop_front`.
//!
//! # Example
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//!
//! // Walk to the first element and splice a new one in after it.
//! let mut cursor = list.cursor_front_mut();
//! cursor.insert_after(99);
//! assert_eq!(cursor.current(), Some(&mut 1));
//! cursor.move_next();
//! assert_eq!(cursor.current(), Some(&mut 99));
//!
//! assert!(list.iter().eq(&[1, 99, 2, 3]));
//! ```

use std::fmt;
use std::ptr::NonNull;

use crate::list::{ForwardList, Link, Node};

/// Read-only position state. `Before` carries the owning list so that two
/// before-front cursors compare equal only for the same list.
enum Pos<'a, T> {
    Before(&'a ForwardList<T>),
    At(NonNull<Node<T>>),
    End,
}

impl<T> Clone for Pos<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pos<'_, T> {}

impl<'b, T> PartialEq<Pos<'b, T>> for Pos<'_, T> {
    fn eq(&self, other: &Pos<'b, T>) -> bool {
        match (self, other) {
            (Pos::Before(a), Pos::Before(b)) => std::ptr::eq(*a, *b),
            (Pos::At(a), Pos::At(b)) => a == b,
            (Pos::End, Pos::End) => true,
            _ => false,
        }
    }
}

impl<'a, T> Pos<'a, T> {
    fn from_link(link: Link<T>) -> Self {
        match link {
            Some(node) => Pos::At(node),
            None => Pos::End,
        }
    }
}

/// Mutable position state. The list itself rides in [`CursorMut`], so the
/// before-front position needs no payload here.
enum PosMut<T> {
    Before,
    At(NonNull<Node<T>>),
    End,
}

impl<T> Clone for PosMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PosMut<T> {}

impl<T> PosMut<T> {
    fn from_link(link: Link<T>) -> Self {
        match link {
            Some(node) => PosMut::At(node),
            None => PosMut::End,
        }
    }
}

// =============================================================================
// Cursor construction
// =============================================================================

impl<T> ForwardList<T> {
    /// Returns a read-only cursor at the first element, or the end cursor if
    /// the list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            pos: Pos::from_link(self.head),
        }
    }

    /// Returns a read-only cursor at the before-front position.
    ///
    /// The cursor designates the sentinel: it yields no element, but one
    /// [`Cursor::move_next`] from it reaches the first element.
    pub fn cursor_before_front(&self) -> Cursor<'_, T> {
        Cursor {
            pos: Pos::Before(self),
        }
    }

    /// Returns the end cursor.
    ///
    /// Every cursor advanced past the last element compares equal to it, as
    /// does [`Cursor::default`].
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor { pos: Pos::End }
    }

    /// Returns a mutable cursor at the first element, or at the end if the
    /// list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            pos: PosMut::from_link(self.head),
            list: self,
        }
    }

    /// Returns a mutable cursor at the before-front position.
    ///
    /// From there, [`CursorMut::insert_after`] prepends and
    /// [`CursorMut::remove_after`] pops the front, so the head slot needs no
    /// special-cased operations.
    pub fn cursor_before_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            pos: PosMut::Before,
            list: self,
        }
    }
}

// =============================================================================
// Cursor: shared, copyable
// =============================================================================

/// A read-only cursor into a [`ForwardList`].
///
/// Cursors are cheap to copy, and copies advance independently. Two cursors
/// compare equal when they designate the same position; a default-constructed
/// cursor is the end cursor, so `cursor != Cursor::default()` is the usual
/// loop condition for manual traversal.
///
/// # Example
///
/// ```
/// use forward_list::ForwardList;
///
/// let list = ForwardList::from([1, 2, 3]);
///
/// let mut cursor = list.cursor_front();
/// let mut sum = 0;
/// while let Some(value) = cursor.current() {
///     sum += value;
///     cursor.move_next();
/// }
/// assert_eq!(sum, 6);
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, T> {
    pos: Pos<'a, T>,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the element at the cursor.
    ///
    /// `None` at the before-front and end positions; those designate places
    /// in the chain, not elements. The returned reference borrows the list,
    /// not the cursor, so it may outlive `self`.
    pub fn current(&self) -> Option<&'a T> {
        match self.pos {
            // Safety: an `At` cursor only ever holds a node of the list it
            // borrows, and the node stays live for the whole borrow `'a`.
            Pos::At(node) => Some(unsafe { &(*node.as_ptr()).value }),
            _ => None,
        }
    }

    /// Returns the element after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = match self.pos {
            Pos::Before(list) => list.head,
            // Safety: live node of the borrowed list.
            Pos::At(node) => unsafe { (*node.as_ptr()).next },
            Pos::End => None,
        };
        // Safety: chain links only ever point at live nodes of the borrowed
        // list.
        next.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Advances to the next position.
    ///
    /// From before-front this lands on the first element (or the end for an
    /// empty list); from the last element it lands on the end. Advancing the
    /// end cursor has no effect.
    pub fn move_next(&mut self) {
        self.pos = match self.pos {
            Pos::Before(list) => Pos::from_link(list.head),
            // Safety: live node of the borrowed list.
            Pos::At(node) => Pos::from_link(unsafe { (*node.as_ptr()).next }),
            Pos::End => Pos::End,
        };
    }

    /// Returns `true` if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.pos, Pos::End)
    }

    /// Returns `true` if the cursor sits at the before-front position.
    #[inline]
    pub fn is_before_front(&self) -> bool {
        matches!(self.pos, Pos::Before(_))
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    /// Returns the end cursor.
    fn default() -> Self {
        Cursor { pos: Pos::End }
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.pos {
            Pos::Before(_) => "Cursor(before-front)",
            Pos::At(_) => "Cursor(at)",
            Pos::End => "Cursor(end)",
        })
    }
}

// Safety: a read-only cursor only ever yields `&T`.
unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

// =============================================================================
// CursorMut: exclusive, splicing
// =============================================================================

/// A cursor with exclusive access to its [`ForwardList`].
///
/// Supports the same position algebra as [`Cursor`] plus O(1) splicing after
/// the current position. The `&mut` borrow means at most one `CursorMut`
/// exists per list at a time; [`CursorMut::as_cursor`] takes read-only
/// snapshots of the position.
///
/// Inserting does not move the cursor: the new element becomes its
/// successor. A build loop therefore alternates [`CursorMut::insert_after`]
/// and [`CursorMut::move_next`] to append in order:
///
/// ```
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::new();
/// let mut cursor = list.cursor_before_front_mut();
/// for value in [1, 2, 3] {
///     cursor.insert_after(value);
///     cursor.move_next();
/// }
///
/// assert!(list.iter().eq(&[1, 2, 3]));
/// ```
pub struct CursorMut<'a, T> {
    pos: PosMut<T>,
    list: &'a mut ForwardList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns the element at the cursor.
    ///
    /// `None` at the before-front and end positions.
    pub fn current(&mut self) -> Option<&mut T> {
        match self.pos {
            // Safety: `At` holds a live node of the exclusively borrowed
            // list, and `&mut self` makes this the only access path.
            PosMut::At(node) => Some(unsafe { &mut (*node.as_ptr()).value }),
            _ => None,
        }
    }

    /// Returns the element after the cursor, if there is one.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        // Safety: chain links only ever point at live nodes of the
        // exclusively borrowed list.
        self.next_link()
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Advances to the next position. See [`Cursor::move_next`].
    pub fn move_next(&mut self) {
        self.pos = match self.pos {
            PosMut::Before => PosMut::from_link(self.list.head),
            // Safety: live node of the exclusively borrowed list.
            PosMut::At(node) => PosMut::from_link(unsafe { (*node.as_ptr()).next }),
            PosMut::End => PosMut::End,
        };
    }

    /// Returns `true` if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.pos, PosMut::End)
    }

    /// Returns `true` if the cursor sits at the before-front position.
    #[inline]
    pub fn is_before_front(&self) -> bool {
        matches!(self.pos, PosMut::Before)
    }

    /// Reborrows the position as a read-only [`Cursor`].
    ///
    /// The snapshot compares equal to the cursor it was taken from.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            pos: match self.pos {
                PosMut::Before => Pos::Before(&*self.list),
                PosMut::At(node) => Pos::At(node),
                PosMut::End => Pos::End,
            },
        }
    }

    /// Inserts `value` directly after the cursor. O(1).
    ///
    /// The cursor does not move; the new element becomes its successor.
    /// At the before-front position this is exactly
    /// [`push_front`](ForwardList::push_front).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end: the end designates no place in
    /// the chain to insert after.
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 3]);
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.insert_after(2);
    ///
    /// assert!(list.iter().eq(&[1, 2, 3]));
    /// ```
    pub fn insert_after(&mut self, value: T) {
        let Some(link) = self.after_link() else {
            panic!("insert_after called on an end cursor");
        };
        *link = Some(Node::alloc(value, *link));
        self.list.len += 1;
    }

    /// Removes and returns the element directly after the cursor. O(1).
    ///
    /// Returns `None` when nothing follows the cursor, including at the
    /// end. At the before-front position this is exactly
    /// [`pop_front`](ForwardList::pop_front).
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    ///
    /// assert_eq!(cursor.remove_after(), Some(2));
    /// assert_eq!(cursor.remove_after(), Some(3));
    /// assert_eq!(cursor.remove_after(), None);
    /// assert!(list.iter().eq(&[1]));
    /// ```
    pub fn remove_after(&mut self) -> Option<T> {
        let link = self.after_link()?;
        let target = (*link)?;
        // Safety: `target` is a node of this list; it is unlinked and
        // reclaimed here exactly once.
        let node = unsafe { Node::reclaim(target) };
        *link = node.next;
        self.list.len -= 1;
        Some(node.value)
    }

    /// Returns the link a splice writes through: the one after the current
    /// position. `None` only at the end.
    fn after_link(&mut self) -> Option<&mut Link<T>> {
        match self.pos {
            PosMut::Before => Some(&mut self.list.head),
            // Safety: `At` holds a live node of the exclusively borrowed
            // list, and `&mut self` makes this the only access path.
            PosMut::At(node) => Some(unsafe { &mut (*node.as_ptr()).next }),
            PosMut::End => None,
        }
    }

    fn next_link(&self) -> Link<T> {
        match self.pos {
            PosMut::Before => self.list.head,
            // Safety: live node of the borrowed list.
            PosMut::At(node) => unsafe { (*node.as_ptr()).next },
            PosMut::End => None,
        }
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.as_cursor() == *other
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        *self == other.as_cursor()
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.as_cursor() == other.as_cursor()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.pos {
            PosMut::Before => "CursorMut(before-front)",
            PosMut::At(_) => "CursorMut(at)",
            PosMut::End => "CursorMut(end)",
        })
    }
}

// Safety: same bounds a `&mut ForwardList<T>` would have.
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_front_on_empty_list_is_end() {
        let list: ForwardList<u32> = ForwardList::new();
        let cursor = list.cursor_front();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor, list.cursor_end());
    }

    #[test]
    fn default_cursor_is_end() {
        let list = ForwardList::from([1]);
        assert!(Cursor::<u32>::default().is_end());
        assert_eq!(list.cursor_end(), Cursor::default());
        assert_ne!(list.cursor_front(), Cursor::default());
    }

    #[test]
    fn before_front_advances_to_front() {
        let list = ForwardList::from([1, 2]);

        let mut cursor = list.cursor_before_front();
        assert!(cursor.is_before_front());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), Some(&1));

        cursor.move_next();
        assert_eq!(cursor, list.cursor_front());
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn before_front_on_empty_list_advances_to_end() {
        let list: ForwardList<u32> = ForwardList::new();
        let mut cursor = list.cursor_before_front();
        assert_eq!(cursor.peek_next(), None);
        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn end_cursor_is_absorbing() {
        let list = ForwardList::from([1]);
        let mut cursor = list.cursor_front();
        cursor.move_next();
        assert!(cursor.is_end());

        cursor.move_next();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), None);
    }

    #[test]
    fn cursor_copies_advance_independently() {
        let list = ForwardList::from([1, 2, 3]);
        let first = list.cursor_front();
        let mut second = first;

        second.move_next();
        assert_eq!(first.current(), Some(&1));
        assert_eq!(second.current(), Some(&2));
        assert_ne!(first, second);
    }

    #[test]
    fn equality_distinguishes_positions_and_lists() {
        let a = ForwardList::from([1, 2]);
        let b = ForwardList::from([1, 2]);

        // Same position in the same list.
        assert_eq!(a.cursor_front(), a.cursor_front());
        assert_eq!(a.cursor_before_front(), a.cursor_before_front());

        // Same logical position in different lists.
        assert_ne!(a.cursor_front(), b.cursor_front());
        assert_ne!(a.cursor_before_front(), b.cursor_before_front());

        // End compares equal everywhere.
        assert_eq!(a.cursor_end(), b.cursor_end());

        // Different positions in one list.
        assert_ne!(a.cursor_before_front(), a.cursor_front());
        assert_ne!(a.cursor_front(), a.cursor_end());
    }

    #[test]
    fn current_reference_outlives_the_cursor() {
        let list = ForwardList::from([7]);
        let value = {
            let cursor = list.cursor_front();
            cursor.current()
        };
        assert_eq!(value, Some(&7));
    }

    #[test]
    fn cursor_mut_equality_across_flavors() {
        let mut list = ForwardList::from([1, 2]);

        let mut cursor = list.cursor_front_mut();
        let snapshot = cursor.as_cursor();
        assert_eq!(snapshot, snapshot);

        // The end comparison works against a borrow-free default cursor,
        // which is how a walk-to-end loop terminates.
        while cursor != Cursor::default() {
            cursor.move_next();
        }
        assert!(cursor.is_end());
        assert_eq!(cursor, Cursor::default());
    }

    #[test]
    fn as_cursor_preserves_position() {
        let mut list = ForwardList::from([1, 2]);
        let mut cursor = list.cursor_front_mut();
        cursor.move_next();

        let snapshot = cursor.as_cursor();
        assert_eq!(snapshot.current(), Some(&2));
        assert_eq!(cursor, snapshot);

        let before = list.cursor_before_front_mut();
        let snapshot = before.as_cursor();
        assert!(snapshot.is_before_front());
        assert_eq!(before, snapshot);
    }

    #[test]
    fn insert_after_at_before_front_matches_push_front() {
        let mut by_cursor = ForwardList::new();
        let mut cursor = by_cursor.cursor_before_front_mut();
        cursor.insert_after(2);
        cursor.insert_after(1);

        let mut by_push = ForwardList::new();
        by_push.push_front(2);
        by_push.push_front(1);

        assert_eq!(by_cursor, by_push);
        assert_eq!(by_cursor.len(), 2);
    }

    #[test]
    fn remove_after_at_before_front_matches_pop_front() {
        let mut list = ForwardList::from([1, 2, 3]);
        let mut cursor = list.cursor_before_front_mut();

        assert_eq!(cursor.remove_after(), Some(1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Some(2));
    }

    #[test]
    fn insert_then_move_lands_on_new_element() {
        let mut list = ForwardList::from([1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.current(), Some(&mut 1));

        cursor.insert_after(99);
        // The cursor stays on 1; the new element is its successor.
        assert_eq!(cursor.current(), Some(&mut 1));
        assert_eq!(cursor.peek_next(), Some(&mut 99));

        cursor.move_next();
        assert_eq!(cursor.current(), Some(&mut 99));

        assert!(list.iter().eq(&[1, 99, 2, 3]));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn remove_after_unsplices_the_successor() {
        let mut list = ForwardList::from([1, 99, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.remove_after(), Some(99));
        // What followed the removed element now follows the cursor.
        assert_eq!(cursor.peek_next(), Some(&mut 2));

        assert!(list.iter().eq(&[1, 2, 3]));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_remove_roundtrip_preserves_list() {
        let mut list = ForwardList::from([1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        cursor.insert_after(9);
        assert_eq!(cursor.remove_after(), Some(9));

        assert_eq!(list, ForwardList::from([1, 2, 3]));
    }

    #[test]
    fn remove_after_at_last_element_returns_none() {
        let mut list = ForwardList::from([1]);
        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.remove_after(), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    #[should_panic(expected = "insert_after called on an end cursor")]
    fn insert_after_end_panics() {
        let mut list: ForwardList<u32> = ForwardList::new();
        let mut cursor = list.cursor_front_mut();
        assert!(cursor.is_end());
        cursor.insert_after(1);
    }

    #[test]
    fn cursor_mut_mutates_elements_in_place() {
        let mut list = ForwardList::from([1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        while let Some(value) = cursor.current() {
            *value *= 10;
            cursor.move_next();
        }

        assert!(list.iter().eq(&[10, 20, 30]));
    }

    #[test]
    fn mixed_splices_keep_len_consistent() {
        let mut list = ForwardList::from([1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        cursor.move_next();
        cursor.insert_after(42);
        cursor.remove_after();
        cursor.insert_after(43);

        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().count(), 4);
        assert!(list.iter().eq(&[1, 2, 43, 3]));
    }
}
