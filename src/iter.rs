//! Iterators over [`ForwardList`].
//!
//! All three iterators visit elements front to back, report exact lengths via
//! `size_hint`, and are fused: once they return `None` they keep returning
//! `None`.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::list::{ForwardList, Link, Node};

impl<T> ForwardList<T> {
    /// Returns an iterator over the elements in list order.
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([1, 2, 3]);
    /// assert_eq!(list.iter().sum::<i32>(), 6);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Returns an iterator yielding mutable references in list order.
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// for value in list.iter_mut() {
    ///     *value *= 2;
    /// }
    /// assert!(list.iter().eq(&[2, 4, 6]));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            len: self.len,
            marker: PhantomData,
        }
    }
}

// =============================================================================
// Iter
// =============================================================================

/// Borrowing iterator over a [`ForwardList`], created by
/// [`ForwardList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        // Safety: the iterator shares the list borrow `'a`; every link
        // reaches a live node until the chain ends in `None`.
        let node = unsafe { &(*node.as_ptr()) };
        self.next = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("len", &self.len).finish()
    }
}

// Safety: a borrowing iterator only ever yields `&T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

// =============================================================================
// IterMut
// =============================================================================

/// Mutable borrowing iterator over a [`ForwardList`], created by
/// [`ForwardList::iter_mut`].
pub struct IterMut<'a, T> {
    next: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.next?;
        // Safety: the iterator holds the exclusive list borrow `'a`, and
        // each node is visited once, so the yielded `&mut` never alias.
        let node = unsafe { &mut (*node.as_ptr()) };
        self.next = node.next;
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

// Safety: same bounds the slice iterators have; `&mut` items mean `T: Send`
// is required to send the iterator.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

// =============================================================================
// IntoIter
// =============================================================================

/// Owning iterator that drains a [`ForwardList`] front to back.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator over its elements.
    ///
    /// Unconsumed elements are released when the iterator drops.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// =============================================================================
// Tests
// =============================================================================
