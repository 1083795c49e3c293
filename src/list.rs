//! Singly-linked list with an embedded sentinel head.
//!
//! Nodes are individually boxed and linked through raw pointers. The list
//! itself carries the sentinel: its `head` link is the "before front"
//! position, so inserting or removing at the head goes through the same
//! positional operations as everywhere else (see [`crate::CursorMut`]).
//!
//! The element count is maintained on every mutation, making [`ForwardList::len`]
//! O(1).
//!
//! # Example
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//!
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_front(), Some(2));
//! assert_eq!(list.pop_front(), Some(3));
//! assert_eq!(list.pop_front(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// A forward link: the next node in the chain, or `None` at the end.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A heap-allocated node holding one element and the link to its successor.
pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Boxes a new node and leaks it into a raw handle owned by the list.
    pub(crate) fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, value })))
    }

    /// Reclaims the box behind `node`.
    ///
    /// # Safety
    ///
    /// `node` must have come from [`Node::alloc`] and must not be reclaimed
    /// or dereferenced again afterwards.
    pub(crate) unsafe fn reclaim(node: NonNull<Node<T>>) -> Box<Node<T>> {
        Box::from_raw(node.as_ptr())
    }
}

/// A singly-linked list with O(1) front operations and O(1) length.
///
/// Every node is owned exclusively by the list holding it; dropping the list
/// releases the whole chain iteratively. Positional insertion and removal go
/// through [`CursorMut`](crate::CursorMut), which covers the head slot via
/// the before-front position.
///
/// Two lists compare equal when they have the same length and pairwise equal
/// elements; ordering is lexicographic over the element sequences.
///
/// # Example
///
/// ```
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from(["b", "c"]);
/// list.push_front("a");
///
/// assert_eq!(list.front(), Some(&"a"));
/// assert!(list.iter().eq(&["a", "b", "c"]));
/// ```
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates an empty list.
    ///
    /// No allocation happens until the first insertion.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // Safety: `head` points at a live node owned by this list; the
        // borrow is tied to `&self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the first element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // Safety: `head` points at a live node owned by this list, and
        // `&mut self` makes this the only access path.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Prepends `value`, making it the new first element. O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::alloc(value, self.head));
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty. O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_front_node().map(|node| node.value)
    }

    /// Removes every element, releasing each node.
    ///
    /// The chain is torn down front to back in a loop, so arbitrarily long
    /// lists never recurse. The list afterwards is indistinguishable from a
    /// freshly constructed one.
    pub fn clear(&mut self) {
        while self.pop_front_node().is_some() {}
    }

    /// Unlinks the first node and hands back its reclaimed box.
    fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        self.head.map(|node| {
            // Safety: every node in the chain came from `Node::alloc` and is
            // unlinked here exactly once.
            let node = unsafe { Node::reclaim(node) };
            self.head = node.next;
            self.len -= 1;
            node
        })
    }
}

// =============================================================================
// Ownership and lifecycle
// =============================================================================

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replaces `self` with a copy of `source`.
    ///
    /// The copy is built in full before being adopted by swap, so a
    /// panicking element clone leaves `self` exactly as it was; the partial
    /// chain is released during unwinding.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

// Safety: the list exclusively owns its nodes. Sending it sends the values;
// shared access only ever hands out `&T`.
unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

// =============================================================================
// Construction from sequences
// =============================================================================

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends the elements at the back, preserving their order.
    ///
    /// Seeking the tail is O(len); each appended element is then O(1).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_before_front_mut();
        while cursor.peek_next().is_some() {
            cursor.move_next();
        }
        for value in iter {
            cursor.insert_after(value);
            cursor.move_next();
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    /// Builds a list with the array's elements in array order.
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([1, 2, 3, 4]);
    /// assert_eq!(list.len(), 4);
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    /// ```
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

// =============================================================================
// Comparisons
// =============================================================================

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================


// proptest does not run under miri
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

    use super::*;

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            failure_persistence: None,
            ..Config::default()
        })]

        #[test]
        fn forward_list_matches_vec_model(sequential 10..100 => ForwardList<u32>);
    }

    /// Transitions over the public API. Index arguments are reduced modulo
    /// `len + 1`, so every generated transition satisfies its preconditions.
    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        InsertAfterNth(usize, u32),
        RemoveAfterNth(usize),
        Clear,
    }

    /// Reference model: a plain `Vec` mutated at the equivalent indices.
    pub struct VecModel;

    impl ReferenceStateMachine for VecModel {
        type State = Vec<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(Vec::new()).boxed()
        }

        fn transitions(_state: &Self::State) -> BoxedStrategy<Self::Transition> {
            prop_oneof![
                3 => any::<u32>().prop_map(Transition::PushFront),
                2 => Just(Transition::PopFront),
                3 => (any::<usize>(), any::<u32>())
                    .prop_map(|(n, v)| Transition::InsertAfterNth(n, v)),
                2 => any::<usize>().prop_map(Transition::RemoveAfterNth),
                1 => Just(Transition::Clear),
            ]
            .boxed()
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match transition {
                Transition::PushFront(v) => state.insert(0, *v),
                Transition::PopFront => {
                    if !state.is_empty() {
                        state.remove(0);
                    }
                }
                Transition::InsertAfterNth(n, v) => {
                    let at = n % (state.len() + 1);
                    state.insert(at, *v);
                }
                Transition::RemoveAfterNth(n) => {
                    let at = n % (state.len() + 1);
                    if at < state.len() {
                        state.remove(at);
                    }
                }
                Transition::Clear => state.clear(),
            }
            state
        }
    }

    impl StateMachineTest for ForwardList<u32> {
        type SystemUnderTest = Self;
        type Reference = VecModel;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            ForwardList::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            match transition {
                Transition::PushFront(v) => state.push_front(v),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::InsertAfterNth(n, v) => {
                    let at = n % (state.len() + 1);
                    let mut cursor = state.cursor_before_front_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    cursor.insert_after(v);
                }
                Transition::RemoveAfterNth(n) => {
                    let at = n % (state.len() + 1);
                    let mut cursor = state.cursor_before_front_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    cursor.remove_after();
                }
                Transition::Clear => state.clear(),
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            assert_eq!(state.len(), ref_state.len());
            assert!(state.iter().eq(ref_state.iter()));
        }
    }
}
