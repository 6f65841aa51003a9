//! Error types for list operations.
//!
//! Rendering never fails. Errors only come from programmatic requests that
//! name something the list does not contain, such as scrolling to an index
//! past the end or to a key that no record produces.

use thiserror::Error;

/// Errors returned by list operations that address a specific record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlatListError {
    /// A row index was outside `0..len`.
    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of records in the list.
        len: usize,
    },

    /// No record in the list produced the requested key.
    #[error("no item with key {0:?}")]
    KeyNotFound(String),

    /// Two records produced the same key.
    #[error("duplicate key {key:?} at indices {first} and {second}")]
    DuplicateKey {
        /// The key both records produced.
        key: String,
        /// Index of the first record with this key.
        first: usize,
        /// Index of the later record with this key.
        second: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlatListError>;
