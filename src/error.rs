//! Error types for list operations.
//!
//! Every operation that requires a non-empty list or a valid position
//! checks its precondition before touching the chain, so a failed call
//! never leaves [`IntList`](crate::IntList) in an inconsistent state.
//!
//! Absence is not a failure: search operations such as
//! [`index_of`](crate::IntList::index_of) signal "not found" with
//! `Option::None` instead of a [`ListError`].

/// Represents a failed list operation.
///
/// # Examples
///
/// ```rust
/// use intlist::{IntList, ListError};
///
/// let mut empty = IntList::new();
/// assert_eq!(empty.pop(), Err(ListError::EmptyList { operation: "pop" }));
///
/// let mut list = IntList::of([1, 2, 3]);
/// assert_eq!(
///     list.update(3, 0).unwrap_err(),
///     ListError::IndexOutOfRange { index: 3, len: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation requires at least one element.
    EmptyList {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// A positional access or mutation was outside the valid range.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList { operation } => {
                write!(formatter, "{operation}: empty list")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(formatter, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl std::error::Error for ListError {}
