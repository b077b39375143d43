//! The singly-linked integer list.
//!
//! This module provides [`IntList`], a mutable owned sequence of `i64`
//! values backed by a singly-linked chain with O(1) access to both ends.
//!
//! Nodes live in an index-based arena (a `Vec` of nodes whose links are
//! indices), so the whole structure is safe Rust with no reference
//! cycles and no unsafe tail pointer. Freed slots are recycled by the
//! allocator, keeping a long-lived list from growing its arena under
//! churn.
//!
//! # Examples
//!
//! ```rust
//! use intlist::IntList;
//!
//! let mut list = IntList::of([1, 2, 3]);
//! list.push_back(4);
//! assert_eq!(list.pop(), Ok(1));
//! assert_eq!(list.to_array(), vec![2, 3, 4]);
//! ```

mod int_list;

pub use int_list::{IntList, IntoIter, Iter};
