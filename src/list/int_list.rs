//! Mutable singly-linked integer list.
//!
//! This module provides [`IntList`], an owned, mutable sequence of `i64`
//! values stored as a singly-linked chain of nodes.
//!
//! # Overview
//!
//! `IntList` keeps three pieces of bookkeeping in sync:
//!
//! - `first`: the head of the chain (or none, if empty)
//! - `last`: the tail of the chain, maintained independently of `first`
//!   so that appending is O(1)
//! - `size`: the node count, maintained incrementally and never
//!   recomputed by traversal
//!
//! Every public operation preserves all three, even when it fails: an
//! operation checks its preconditions before relinking anything, so a
//! returned [`ListError`] guarantees the list is unchanged.
//!
//! # Storage
//!
//! Nodes live in an index-based arena: a `Vec<Node>` whose `next` links
//! are slot indices rather than pointers. Freed slots go on a free list
//! and are recycled by the allocator. This keeps the structure entirely
//! in safe Rust while preserving the complexity profile of a hand-linked
//! chain (O(1) push at either end, O(n) positional access).
//!
//! # Examples
//!
//! ```rust
//! use intlist::IntList;
//!
//! // Build a list, mutate both ends, and query it.
//! let mut list = IntList::range(1, 5);
//! list.push(0).push_back(6);
//! assert_eq!(list.len(), 7);
//! assert_eq!(list.first(), Ok(0));
//! assert_eq!(list.last(), Ok(6));
//!
//! // Mutators are chainable; queries never mutate.
//! list.drop_front().unwrap().drop_back().unwrap();
//! assert_eq!(list.to_array(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(list.sum(), Ok(15));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ListError;

/// Internal node structure.
///
/// The `next` link is an arena slot index, not a pointer; `None` marks
/// the end of the chain.
#[derive(Clone)]
struct Node {
    /// The value stored in this node.
    value: i64,
    /// Arena index of the successor node (if any).
    next: Option<usize>,
}

/// A mutable singly-linked list of `i64` values.
///
/// The chain tracks both ends, so pushing at the front and at the back
/// are both O(1). Positional operations walk the chain from `first`.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `push`       | O(1)       |
/// | `push_back`  | O(1)       |
/// | `pop`        | O(1)       |
/// | `pop_back`   | O(n)       |
/// | `get`        | O(n)       |
/// | `insert`     | O(n)       |
/// | `first`/`last`/`len` | O(1) |
///
/// `pop_back` is O(n) because a singly-linked chain has no back-pointer
/// from the tail to its predecessor.
///
/// # Examples
///
/// ```rust
/// use intlist::IntList;
///
/// let list = IntList::singleton(42);
/// assert_eq!(list.first(), Ok(42));
/// ```
pub struct IntList {
    /// Node arena; `next` links index into this vector.
    nodes: Vec<Node>,
    /// Recycled slots available to the allocator.
    free: Vec<usize>,
    /// Arena index of the head node (if any).
    first: Option<usize>,
    /// Arena index of the tail node (if any).
    last: Option<usize>,
    /// Number of nodes in the chain.
    size: usize,
}

// =============================================================================
// Construction
// =============================================================================

impl IntList {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            size: 0,
        }
    }

    /// Creates a list containing a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::singleton(42);
    /// assert_eq!(list.first(), Ok(42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[must_use]
    pub fn singleton(value: i64) -> Self {
        let mut list = Self::new();
        list.push_back(value);
        list
    }

    /// Creates a list from any sequence of values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = i64>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Creates a list containing the elements of the slice, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::from_array(&[1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_array(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }

    /// Creates a sequential list from `first` to `last`, both inclusive,
    /// stepping by 1 when ascending and by -1 when descending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// assert_eq!(IntList::range(1, 5).to_array(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(IntList::range(3, 1).to_array(), vec![3, 2, 1]);
    /// assert_eq!(IntList::range(7, 7).to_array(), vec![7]);
    /// ```
    #[must_use]
    pub fn range(first: i64, last: i64) -> Self {
        Self::range_step(first, last, if first < last { 1 } else { -1 })
    }

    /// Creates a sequential list from `first` to `last`, both inclusive,
    /// with an explicit step.
    ///
    /// A zero step yields an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// assert_eq!(IntList::range_step(1, 9, 3).to_array(), vec![1, 4, 7]);
    /// assert_eq!(IntList::range_step(9, 1, -4).to_array(), vec![9, 5, 1]);
    /// assert!(IntList::range_step(1, 9, 0).is_empty());
    /// ```
    #[must_use]
    pub fn range_step(first: i64, last: i64, step: i64) -> Self {
        let mut list = Self::new();
        if step == 0 {
            return list;
        }
        let mut current = first;
        loop {
            let in_range = if step > 0 { current <= last } else { current >= last };
            if !in_range {
                break;
            }
            list.push_back(current);
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }
        list
    }

    /// Creates a sequential list from `first` (inclusive) to `last`
    /// (exclusive), stepping by 1 when ascending and by -1 when
    /// descending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// assert_eq!(IntList::range_ex(1, 5).to_array(), vec![1, 2, 3, 4]);
    /// assert_eq!(IntList::range_ex(3, 1).to_array(), vec![3, 2]);
    /// assert!(IntList::range_ex(7, 7).is_empty());
    /// ```
    #[must_use]
    pub fn range_ex(first: i64, last: i64) -> Self {
        Self::range_step_ex(first, last, if first < last { 1 } else { -1 })
    }

    /// Creates a sequential list from `first` (inclusive) to `last`
    /// (exclusive) with an explicit step.
    ///
    /// A zero step yields an empty list.
    #[must_use]
    pub fn range_step_ex(first: i64, last: i64, step: i64) -> Self {
        let mut list = Self::new();
        if step == 0 {
            return list;
        }
        let mut current = first;
        loop {
            let in_range = if step > 0 { current < last } else { current > last };
            if !in_range {
                break;
            }
            list.push_back(current);
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }
        list
    }

    /// Creates a list of `count` values produced by iterated application
    /// of `function` to `start`.
    ///
    /// The list contains `start`, `function(start)`,
    /// `function(function(start))`, and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let powers = IntList::generate_n(1, |value| value * 2, 5);
    /// assert_eq!(powers.to_array(), vec![1, 2, 4, 8, 16]);
    /// ```
    #[must_use]
    pub fn generate_n<F: FnMut(i64) -> i64>(start: i64, mut function: F, count: usize) -> Self {
        let mut list = Self::new();
        let mut current = start;
        for _ in 0..count {
            list.push_back(current);
            current = function(current);
        }
        list
    }

    /// Creates a list by iterated application of `function` to `start`
    /// while `condition` holds for the current value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::generate_while(1, |value| value * 3, |value| value < 30);
    /// assert_eq!(list.to_array(), vec![1, 3, 9, 27]);
    /// ```
    #[must_use]
    pub fn generate_while<F, C>(start: i64, mut function: F, condition: C) -> Self
    where
        F: FnMut(i64) -> i64,
        C: Fn(i64) -> bool,
    {
        let mut list = Self::new();
        let mut current = start;
        while condition(current) {
            list.push_back(current);
            current = function(current);
        }
        list
    }

    /// Creates a list consisting of `count` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// assert_eq!(IntList::repeat(7, 3).to_array(), vec![7, 7, 7]);
    /// assert!(IntList::repeat(7, 0).is_empty());
    /// ```
    #[must_use]
    pub fn repeat(value: i64, count: usize) -> Self {
        let mut list = Self::new();
        for _ in 0..count {
            list.push_back(value);
        }
        list
    }
}

// =============================================================================
// Node Primitives
// =============================================================================

impl IntList {
    /// Allocates an arena slot for a new node, recycling freed slots.
    fn alloc(&mut self, value: i64, next: Option<usize>) -> usize {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = Node { value, next };
            slot
        } else {
            self.nodes.push(Node { value, next });
            self.nodes.len() - 1
        }
    }

    /// Returns an unlinked node's slot to the free list.
    fn release(&mut self, slot: usize) {
        self.free.push(slot);
    }

    /// Returns the arena index of the node at `index`.
    ///
    /// The two ends are resolved in O(1) through `first` and `last`;
    /// interior positions cost a forward scan.
    fn node_at(&self, index: usize) -> Result<usize, ListError> {
        if index >= self.size {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }
        let Some(head) = self.first else {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.size,
            });
        };
        if index == 0 {
            return Ok(head);
        }
        if index == self.size - 1
            && let Some(tail) = self.last
        {
            return Ok(tail);
        }
        let mut current = head;
        for _ in 0..index {
            match self.nodes[current].next {
                Some(next) => current = next,
                None => {
                    return Err(ListError::IndexOutOfRange {
                        index,
                        len: self.size,
                    });
                }
            }
        }
        Ok(current)
    }

    /// Unlinks and releases the head node, if any.
    fn unlink_front(&mut self) {
        let Some(head) = self.first else {
            return;
        };
        if self.size == 1 {
            self.last = None;
        }
        self.first = self.nodes[head].next;
        self.size -= 1;
        self.release(head);
    }

    /// Unlinks and releases the tail node, if any.
    ///
    /// Costs a forward scan to the tail's predecessor.
    fn unlink_back(&mut self) {
        let Some(tail) = self.last else {
            return;
        };
        if self.size == 1 {
            self.first = None;
            self.last = None;
        } else {
            let Some(mut current) = self.first else {
                return;
            };
            while let Some(next) = self.nodes[current].next {
                if next == tail {
                    break;
                }
                current = next;
            }
            self.nodes[current].next = None;
            self.last = Some(current);
        }
        self.size -= 1;
        self.release(tail);
    }
}

// =============================================================================
// Structural Mutators
// =============================================================================

impl IntList {
    /// Prepends `value` to the front of the list.
    ///
    /// Together with [`pop`](Self::pop) this gives the list stack
    /// (LIFO) behavior.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::new();
    /// list.push(3).push(2).push(1);
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: i64) -> &mut Self {
        let node = self.alloc(value, self.first);
        if self.last.is_none() {
            self.last = Some(node);
        }
        self.first = Some(node);
        self.size += 1;
        self
    }

    /// Appends `value` to the end of the list.
    ///
    /// # Complexity
    ///
    /// O(1), through the independently maintained tail link.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::new();
    /// list.push_back(1).push_back(2).push_back(3);
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: i64) -> &mut Self {
        let node = self.alloc(value, None);
        match self.last {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.size += 1;
        self
    }

    /// Inserts `value` so that it ends up at index `position`.
    ///
    /// `position == 0` behaves like [`push`](Self::push) and
    /// `position == len()` like [`push_back`](Self::push_back); interior
    /// positions splice a node after the predecessor at
    /// `position - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `position > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 3]);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(2));
    /// ```
    pub fn insert(&mut self, position: usize, value: i64) -> Result<&mut Self, ListError> {
        if position > self.size {
            return Err(ListError::IndexOutOfRange {
                index: position,
                len: self.size,
            });
        }
        if position == 0 {
            self.push(value);
        } else if position == self.size {
            self.push_back(value);
        } else {
            let predecessor = self.node_at(position - 1)?;
            let successor = self.nodes[predecessor].next;
            let node = self.alloc(value, successor);
            self.nodes[predecessor].next = Some(node);
            self.size += 1;
        }
        Ok(self)
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2]);
    /// assert_eq!(list.pop(), Ok(1));
    /// assert_eq!(list.to_array(), vec![2]);
    /// ```
    pub fn pop(&mut self) -> Result<i64, ListError> {
        let Some(head) = self.first else {
            return Err(ListError::EmptyList { operation: "pop" });
        };
        let value = self.nodes[head].value;
        self.unlink_front();
        Ok(value)
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2]);
    /// assert_eq!(list.pop_back(), Ok(2));
    /// assert_eq!(list.to_array(), vec![1]);
    /// ```
    pub fn pop_back(&mut self) -> Result<i64, ListError> {
        let Some(tail) = self.last else {
            return Err(ListError::EmptyList {
                operation: "pop_back",
            });
        };
        let value = self.nodes[tail].value;
        self.unlink_back();
        Ok(value)
    }

    /// Removes the element at `position`.
    ///
    /// The front and back positions go through the O(1) front unlink and
    /// the tail-aware back unlink respectively, so `first`, `last`, and
    /// `size` stay consistent for every position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2, 3]);
    /// list.delete(1).unwrap();
    /// assert_eq!(list.to_array(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, position: usize) -> Result<&mut Self, ListError> {
        if position >= self.size {
            return Err(ListError::IndexOutOfRange {
                index: position,
                len: self.size,
            });
        }
        if position == 0 {
            self.unlink_front();
            return Ok(self);
        }
        if position == self.size - 1 {
            self.unlink_back();
            return Ok(self);
        }
        let predecessor = self.node_at(position - 1)?;
        let Some(target) = self.nodes[predecessor].next else {
            return Err(ListError::IndexOutOfRange {
                index: position,
                len: self.size,
            });
        };
        self.nodes[predecessor].next = self.nodes[target].next;
        self.size -= 1;
        self.release(target);
        Ok(self)
    }

    /// Removes all occurrences of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2, 1, 3, 1]);
    /// list.delete_item(1);
    /// assert_eq!(list.to_array(), vec![2, 3]);
    /// ```
    pub fn delete_item(&mut self, value: i64) -> &mut Self {
        while let Some(index) = self.index_of(value) {
            if self.delete(index).is_err() {
                break;
            }
        }
        self
    }

    /// Removes the first element without returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn drop_front(&mut self) -> Result<&mut Self, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList {
                operation: "drop_front",
            });
        }
        self.unlink_front();
        Ok(self)
    }

    /// Removes the last element without returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn drop_back(&mut self) -> Result<&mut Self, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList {
                operation: "drop_back",
            });
        }
        self.unlink_back();
        Ok(self)
    }

    /// Removes up to `count` elements from the front, always leaving at
    /// least one element in a non-empty list.
    ///
    /// The stop-one-short bound is part of the operation's contract;
    /// use [`drop_while`](Self::drop_while) (or repeated
    /// [`drop_front`](Self::drop_front)) to empty a list from the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::range(1, 5);
    /// list.drop_n(2);
    /// assert_eq!(list.to_array(), vec![3, 4, 5]);
    ///
    /// list.drop_n(10);
    /// assert_eq!(list.to_array(), vec![5]);
    /// ```
    pub fn drop_n(&mut self, count: usize) -> &mut Self {
        let bound = count.min(self.size.saturating_sub(1));
        for _ in 0..bound {
            self.unlink_front();
        }
        self
    }

    /// Removes up to `count` elements from the back, always leaving at
    /// least one element in a non-empty list.
    ///
    /// Same stop-one-short bound as [`drop_n`](Self::drop_n).
    pub fn drop_back_n(&mut self, count: usize) -> &mut Self {
        let bound = count.min(self.size.saturating_sub(1));
        for _ in 0..bound {
            self.unlink_back();
        }
        self
    }

    /// Removes elements from the front while `predicate` holds.
    ///
    /// Unlike [`drop_n`](Self::drop_n), this may empty the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([2, 4, 5, 6]);
    /// list.drop_while(|value| value % 2 == 0);
    /// assert_eq!(list.to_array(), vec![5, 6]);
    /// ```
    pub fn drop_while<P: Fn(i64) -> bool>(&mut self, predicate: P) -> &mut Self {
        while let Some(head) = self.first {
            if !predicate(self.nodes[head].value) {
                break;
            }
            self.unlink_front();
        }
        self
    }

    /// Removes elements from the back while `predicate` holds.
    ///
    /// Unlike [`drop_back_n`](Self::drop_back_n), this may empty the
    /// list.
    pub fn drop_back_while<P: Fn(i64) -> bool>(&mut self, predicate: P) -> &mut Self {
        while let Some(tail) = self.last {
            if !predicate(self.nodes[tail].value) {
                break;
            }
            self.unlink_back();
        }
        self
    }

    /// Overwrites the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 0, 3]);
    /// list.update(1, 2).unwrap();
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    /// ```
    pub fn update(&mut self, position: usize, value: i64) -> Result<&mut Self, ListError> {
        let node = self.node_at(position)?;
        self.nodes[node].value = value;
        Ok(self)
    }

    /// Trims the list in place to the positions `[start, end]`, both
    /// inclusive.
    ///
    /// This is destructive; callers that need the original should clone
    /// first, or use [`slice`](Self::slice) which allocates a new list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] unless
    /// `start <= end < len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::range(1, 9);
    /// list.sublist(2, 4).unwrap();
    /// assert_eq!(list.to_array(), vec![3, 4, 5]);
    /// ```
    pub fn sublist(&mut self, start: usize, end: usize) -> Result<&mut Self, ListError> {
        if end >= self.size {
            return Err(ListError::IndexOutOfRange {
                index: end,
                len: self.size,
            });
        }
        if start > end {
            return Err(ListError::IndexOutOfRange {
                index: start,
                len: self.size,
            });
        }
        for _ in 0..(self.size - 1 - end) {
            self.unlink_back();
        }
        for _ in 0..start {
            self.unlink_front();
        }
        Ok(self)
    }

    /// Exchanges the values at positions `i` and `j`.
    ///
    /// A no-op when `i == j` (both indices are still validated).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if either index is
    /// `>= len()`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<&mut Self, ListError> {
        let node_i = self.node_at(i)?;
        let node_j = self.node_at(j)?;
        if node_i != node_j {
            let value = self.nodes[node_i].value;
            self.nodes[node_i].value = self.nodes[node_j].value;
            self.nodes[node_j].value = value;
        }
        Ok(self)
    }

    /// Removes later duplicates in place, keeping the first occurrence
    /// of each value in order.
    ///
    /// # Complexity
    ///
    /// O(n²): each element is checked against the set of values already
    /// kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2, 2, 3, 1]);
    /// list.distinct();
    /// assert_eq!(list.to_array(), vec![1, 2, 3]);
    /// ```
    pub fn distinct(&mut self) -> &mut Self {
        let mut seen = Self::new();
        let mut previous: Option<usize> = None;
        let mut current = self.first;
        while let Some(node) = current {
            let value = self.nodes[node].value;
            let next = self.nodes[node].next;
            if seen.contains(value) {
                match previous {
                    Some(predecessor) => self.nodes[predecessor].next = next,
                    None => self.first = next,
                }
                if self.last == Some(node) {
                    self.last = previous;
                }
                self.size -= 1;
                self.release(node);
            } else {
                seen.push(value);
                previous = current;
            }
            current = next;
        }
        self
    }

    /// Appends all values of `other` to the end of this list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2]);
    /// let other = IntList::of([3, 4]);
    /// list.add_all(&other);
    /// assert_eq!(list.to_array(), vec![1, 2, 3, 4]);
    /// assert_eq!(other.len(), 2);
    /// ```
    pub fn add_all(&mut self, other: &Self) -> &mut Self {
        for value in other {
            self.push_back(value);
        }
        self
    }

    /// Transforms every value in place and returns the list for
    /// chaining.
    ///
    /// The chain itself is untouched; only node values change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let mut list = IntList::of([1, 2, 3]);
    /// list.map(|value| value * 10);
    /// assert_eq!(list.to_array(), vec![10, 20, 30]);
    /// ```
    pub fn map<F: FnMut(i64) -> i64>(&mut self, mut function: F) -> &mut Self {
        let mut current = self.first;
        while let Some(node) = current {
            self.nodes[node].value = function(self.nodes[node].value);
            current = self.nodes[node].next;
        }
        self
    }
}

// =============================================================================
// Traversal & Query
// =============================================================================

impl IntList {
    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1), the count is maintained incrementally.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn first(&self) -> Result<i64, ListError> {
        match self.first {
            Some(head) => Ok(self.nodes[head].value),
            None => Err(ListError::EmptyList { operation: "first" }),
        }
    }

    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn last(&self) -> Result<i64, ListError> {
        match self.last {
            Some(tail) => Ok(self.nodes[tail].value),
            None => Err(ListError::EmptyList { operation: "last" }),
        }
    }

    /// Returns the value at `index`.
    ///
    /// # Complexity
    ///
    /// O(1) for the two ends, O(index) otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::{IntList, ListError};
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(2));
    /// assert_eq!(list.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<i64, ListError> {
        let node = self.node_at(index)?;
        Ok(self.nodes[node].value)
    }

    /// Finds the first value satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3, 4]);
    /// assert_eq!(list.find(|value| value > 2), Some(3));
    /// assert_eq!(list.find(|value| value > 9), None);
    /// ```
    #[must_use]
    pub fn find<P: Fn(i64) -> bool>(&self, predicate: P) -> Option<i64> {
        self.iter().find(|&value| predicate(value))
    }

    /// Finds the first value **not** satisfying `predicate`.
    #[must_use]
    pub fn find_not<P: Fn(i64) -> bool>(&self, predicate: P) -> Option<i64> {
        self.iter().find(|&value| !predicate(value))
    }

    /// Finds the first value satisfying `predicate`, or `default`.
    #[must_use]
    pub fn find_or<P: Fn(i64) -> bool>(&self, predicate: P, default: i64) -> i64 {
        self.find(predicate).unwrap_or(default)
    }

    /// Finds the first value **not** satisfying `predicate`, or
    /// `default`.
    #[must_use]
    pub fn find_not_or<P: Fn(i64) -> bool>(&self, predicate: P, default: i64) -> i64 {
        self.find_not(predicate).unwrap_or(default)
    }

    /// Returns the index of the first occurrence of `value`, or `None`
    /// if the list does not contain it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([5, 6, 5]);
    /// assert_eq!(list.index_of(5), Some(0));
    /// assert_eq!(list.index_of(7), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Returns the index of the last occurrence of `value`, or `None`
    /// if the list does not contain it.
    #[must_use]
    pub fn last_index_of(&self, value: i64) -> Option<usize> {
        let mut found = None;
        for (index, element) in self.iter().enumerate() {
            if element == value {
                found = Some(index);
            }
        }
        found
    }

    /// Returns `true` if the list contains `value`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|element| element == value)
    }

    /// Counts the elements satisfying `predicate`.
    #[must_use]
    pub fn count<P: Fn(i64) -> bool>(&self, predicate: P) -> usize {
        self.iter().filter(|&value| predicate(value)).count()
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Short-circuits on the first non-matching element; trivially true
    /// for an empty list.
    #[must_use]
    pub fn forall<P: Fn(i64) -> bool>(&self, predicate: P) -> bool {
        self.iter().all(predicate)
    }

    /// Returns `true` if `predicate` holds for at least one element.
    ///
    /// Short-circuits on the first match.
    #[must_use]
    pub fn exists<P: Fn(i64) -> bool>(&self, predicate: P) -> bool {
        self.iter().any(predicate)
    }

    /// Returns the largest value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn max(&self) -> Result<i64, ListError> {
        self.iter()
            .max()
            .ok_or(ListError::EmptyList { operation: "max" })
    }

    /// Returns the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn min(&self) -> Result<i64, ListError> {
        self.iter()
            .min()
            .ok_or(ListError::EmptyList { operation: "min" })
    }

    /// Sums the values of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn sum(&self) -> Result<i64, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList { operation: "sum" });
        }
        Ok(self.iter().sum())
    }

    /// Returns `true` if `prefix` is a prefix of this list.
    ///
    /// An empty `prefix` is trivially a prefix of any list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert!(list.is_prefix(&IntList::of([1, 2])));
    /// assert!(list.is_prefix(&IntList::new()));
    /// assert!(!list.is_prefix(&IntList::of([2])));
    /// ```
    #[must_use]
    pub fn is_prefix(&self, prefix: &Self) -> bool {
        prefix.size <= self.size && self.iter().zip(prefix.iter()).all(|(a, b)| a == b)
    }

    /// Returns `true` if `suffix` is a suffix of this list.
    ///
    /// Implemented as a prefix test over two reversals, costing O(n)
    /// extra space for the temporary lists.
    #[must_use]
    pub fn is_suffix(&self, suffix: &Self) -> bool {
        self.reverse().is_prefix(&suffix.reverse())
    }

    /// Returns `true` if `needle` occurs as a contiguous sub-sequence
    /// of this list.
    ///
    /// An empty `needle` is trivially contained. A working copy is
    /// repeatedly aligned on the next occurrence of the needle's first
    /// value and tested with [`is_prefix`](Self::is_prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3, 4]);
    /// assert!(list.is_sublist(&IntList::of([2, 3])));
    /// assert!(!list.is_sublist(&IntList::of([3, 2])));
    /// ```
    #[must_use]
    pub fn is_sublist(&self, needle: &Self) -> bool {
        let Ok(head) = needle.first() else {
            // Empty needle.
            return true;
        };
        if self.size < needle.size {
            return false;
        }
        let mut working = self.clone();
        while working.size >= needle.size {
            let Some(offset) = working.index_of(head) else {
                return false;
            };
            if working.size - offset < needle.size {
                return false;
            }
            working.drop_n(offset);
            if working.is_prefix(needle) {
                return true;
            }
            if working.size == needle.size {
                return false;
            }
            working.drop_n(1);
        }
        false
    }
}

// =============================================================================
// Higher-Order / Derived Construction
// =============================================================================

impl IntList {
    /// Returns a new list of the elements satisfying `predicate`, in
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::range(1, 6);
    /// let evens = list.filter(|value| value % 2 == 0);
    /// assert_eq!(evens.to_array(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P: Fn(i64) -> bool>(&self, predicate: P) -> Self {
        self.iter().filter(|&value| predicate(value)).collect()
    }

    /// Returns a new list of the elements **not** satisfying
    /// `predicate`, in order.
    #[must_use]
    pub fn filter_not<P: Fn(i64) -> bool>(&self, predicate: P) -> Self {
        self.iter().filter(|&value| !predicate(value)).collect()
    }

    /// Folds the list left to right from `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// let sum = list.fold_left(0, |accumulator, value| accumulator + value);
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn fold_left<F: FnMut(i64, i64) -> i64>(&self, initial: i64, function: F) -> i64 {
        self.iter().fold(initial, function)
    }

    /// Folds the list right to left from `initial`.
    ///
    /// Operates over an explicit reversal, which is discarded
    /// afterwards; the list itself is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// // 1 - (2 - (3 - 0))
    /// let result = list.fold_right(0, |value, accumulator| value - accumulator);
    /// assert_eq!(result, 2);
    /// ```
    #[must_use]
    pub fn fold_right<F: FnMut(i64, i64) -> i64>(&self, initial: i64, mut function: F) -> i64 {
        let reversed = self.reverse();
        let mut accumulator = initial;
        for value in &reversed {
            accumulator = function(value, accumulator);
        }
        accumulator
    }

    /// Reduces the list left to right using the first element as the
    /// initial accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert_eq!(list.reduce_left(|accumulator, value| accumulator + value), Ok(6));
    /// ```
    pub fn reduce_left<F: FnMut(i64, i64) -> i64>(&self, mut function: F) -> Result<i64, ListError> {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return Err(ListError::EmptyList {
                operation: "reduce_left",
            });
        };
        Ok(iter.fold(first, |accumulator, value| function(accumulator, value)))
    }

    /// Reduces the list right to left using the last element as the
    /// initial accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3, 4]);
    /// // 1 - (2 - (3 - 4))
    /// assert_eq!(list.reduce_right(|value, accumulator| value - accumulator), Ok(-2));
    /// ```
    pub fn reduce_right<F: FnMut(i64, i64) -> i64>(
        &self,
        mut function: F,
    ) -> Result<i64, ListError> {
        let values = self.to_array();
        let mut iter = values.into_iter().rev();
        let Some(last) = iter.next() else {
            return Err(ListError::EmptyList {
                operation: "reduce_right",
            });
        };
        Ok(iter.fold(last, |accumulator, value| function(value, accumulator)))
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert_eq!(list.reverse().to_array(), vec![3, 2, 1]);
    /// assert_eq!(list.reverse().reverse(), list);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for value in self {
            result.push(value);
        }
        result
    }

    /// Returns a new list of the first `count` elements.
    ///
    /// Taking more than `len()` elements returns a copy of the whole
    /// list.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.iter().take(count).collect()
    }

    /// Returns a new list of the longest prefix satisfying `predicate`.
    #[must_use]
    pub fn take_while<P: Fn(i64) -> bool>(&self, predicate: P) -> Self {
        self.iter().take_while(|&value| predicate(value)).collect()
    }

    /// Returns a new list of the last `count` elements.
    #[must_use]
    pub fn take_right(&self, count: usize) -> Self {
        self.iter().skip(self.size.saturating_sub(count)).collect()
    }

    /// Returns a new list of the longest suffix satisfying `predicate`.
    ///
    /// Measured through a reversal and a prefix take, costing O(n)
    /// temporary space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 3, 2, 6, 8]);
    /// let suffix = list.take_right_while(|value| value % 2 == 0);
    /// assert_eq!(suffix.to_array(), vec![2, 6, 8]);
    /// ```
    #[must_use]
    pub fn take_right_while<P: Fn(i64) -> bool>(&self, predicate: P) -> Self {
        let matched = self.reverse().take_while(predicate);
        self.take_right(matched.size)
    }

    /// Returns a new list of the elements at positions `[start, end]`,
    /// both inclusive.
    ///
    /// Unlike [`sublist`](Self::sublist), the original is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] unless
    /// `start <= end < len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::range(1, 9);
    /// let middle = list.slice(2, 4).unwrap();
    /// assert_eq!(middle.to_array(), vec![3, 4, 5]);
    /// assert_eq!(list.len(), 9);
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, ListError> {
        if end >= self.size {
            return Err(ListError::IndexOutOfRange {
                index: end,
                len: self.size,
            });
        }
        if start > end {
            return Err(ListError::IndexOutOfRange {
                index: start,
                len: self.size,
            });
        }
        Ok(self.iter().skip(start).take(end - start + 1).collect())
    }

    /// Returns a new list with `separator` between (not around) the
    /// original elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert_eq!(list.intersperse(0).to_array(), vec![1, 0, 2, 0, 3]);
    /// assert!(IntList::new().intersperse(0).is_empty());
    /// ```
    #[must_use]
    pub fn intersperse(&self, separator: i64) -> Self {
        let mut result = Self::new();
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return result;
        };
        result.push_back(first);
        for value in iter {
            result.push_back(separator);
            result.push_back(value);
        }
        result
    }

    /// Returns a new list without duplicate values, keeping the first
    /// occurrence of each in order.
    ///
    /// Non-mutating counterpart of [`distinct`](Self::distinct).
    #[must_use]
    pub fn unique(&self) -> Self {
        let mut result = Self::new();
        for value in self {
            if !result.contains(value) {
                result.push_back(value);
            }
        }
        result
    }

    /// Calls `visitor` on each value, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// let mut total = 0;
    /// list.foreach(|value| total += value);
    /// assert_eq!(total, 6);
    /// ```
    pub fn foreach<F: FnMut(i64)>(&self, mut visitor: F) {
        for value in self {
            visitor(value);
        }
    }

    /// Copies the values into a freshly allocated `Vec`, in order.
    #[must_use]
    pub fn to_array(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Returns an iterator over the values, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intlist::IntList;
    ///
    /// let list = IntList::of([1, 2, 3]);
    /// assert_eq!(list.iter().sum::<i64>(), 6);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.first,
            remaining: self.size,
        }
    }

    /// Prints the list to standard output as
    /// `IList <identity> : [v0, v1, ..., vn]`, where the identity is
    /// the list's address.
    ///
    /// Diagnostic aid; for embedding in other output use the `Display`
    /// implementation, which renders just the bracketed values.
    pub fn print_list(&self) {
        println!("IList {:p} : {}", self, self);
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the values of an [`IntList`].
///
/// Values are `i64` and are yielded by copy, front to back.
pub struct Iter<'a> {
    list: &'a IntList,
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = self.list.nodes[node].next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.list.nodes[node].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over the values of an [`IntList`].
///
/// Consumes the list front to back.
pub struct IntoIter {
    list: IntList,
}

impl Iterator for IntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.list.size
    }
}

impl IntoIterator for IntList {
    type Item = i64;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = i64;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for IntList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntList {
    /// Returns a copy with a fresh, compact chain; nothing is shared
    /// with the original.
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl FromIterator<i64> for IntList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl Extend<i64> for IntList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl From<&[i64]> for IntList {
    fn from(values: &[i64]) -> Self {
        Self::from_array(values)
    }
}

impl From<Vec<i64>> for IntList {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().collect()
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for IntList {}

impl Hash for IntList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths.
        self.size.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl fmt::Debug for IntList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for IntList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
