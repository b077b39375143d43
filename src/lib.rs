//! # intlist
//!
//! A mutable singly-linked integer list with a rich imperative and
//! functional API.
//!
//! ## Overview
//!
//! [`IntList`] is an owned sequence of `i64` values backed by a
//! singly-linked chain of nodes with independently maintained `first`
//! and `last` ends, giving O(1) prepend *and* append. On top of the
//! chain it exposes four operation families:
//!
//! - **Structural mutators**: `push`, `push_back`, `insert`, `pop`,
//!   `delete`, the `drop_*` family, `update`, `sublist`, `swap`,
//!   `distinct`
//! - **Traversal and query**: `get`, `find*`, `index_of`, `contains`,
//!   `forall`/`exists`/`count`, `max`/`min`/`sum`, and the
//!   `is_prefix`/`is_suffix`/`is_sublist` relations
//! - **Higher-order construction**: `map`, `filter`, `fold_left`/
//!   `fold_right`, `reverse`, the `take_*` family, `slice`,
//!   `intersperse`
//! - **Generators**: `range*`, `repeat`, `generate_n`, `generate_while`
//!
//! Invalid accesses fail with an explicit [`ListError`] instead of
//! panicking, and a failed operation never mutates the list.
//!
//! ## Example
//!
//! ```rust
//! use intlist::IntList;
//!
//! let mut list = IntList::range(1, 5);
//! list.push(0).push_back(6);
//! assert_eq!(list.to_array(), vec![0, 1, 2, 3, 4, 5, 6]);
//!
//! let evens = list.filter(|value| value % 2 == 0);
//! assert_eq!(evens.fold_left(0, |accumulator, value| accumulator + value), 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use intlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::list::IntList;
}

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::IntList;
