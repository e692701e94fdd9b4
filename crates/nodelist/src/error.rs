//! Error types for list operations

use std::fmt;

use thiserror::Error;

use crate::node::Link;

/// Main error type for list operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the valid range for the operation
    #[error("Index out of range: index {index} for list of length {length}")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Length of the list at the time of the call
        length: usize,
    },

    /// Operation needs at least one node but the list is empty
    #[error("Empty list access: {operation} requires a non-empty list")]
    EmptyListAccess {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl ListError {
    /// Shorthand for a [`ListError::EmptyListAccess`] raised by `operation`.
    pub fn empty(operation: &'static str) -> Self {
        ListError::EmptyListAccess { operation }
    }
}

/// Result type alias for list operations
pub type Result<T> = std::result::Result<T, ListError>;

/// Failed insertion. Carries the untouched list back to the caller.
#[derive(Error)]
#[error("{error}")]
pub struct InsertError {
    head: Link,
    error: ListError,
}

impl InsertError {
    pub(crate) fn new(head: Link, error: ListError) -> Self {
        Self { head, error }
    }

    /// The reason the insertion was rejected.
    pub fn error(&self) -> &ListError {
        &self.error
    }

    /// Recover the list that was passed to `insert`.
    pub fn into_head(self) -> Link {
        self.head
    }

    /// Split into the recovered list and the underlying error.
    pub fn into_parts(self) -> (Link, ListError) {
        (self.head, self.error)
    }
}

impl fmt::Debug for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("length", &crate::ops::length(&self.head))
            .field("error", &self.error)
            .finish()
    }
}

impl From<InsertError> for ListError {
    fn from(err: InsertError) -> Self {
        err.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ListError::OutOfRange {
            index: 7,
            length: 3,
        };
        assert_eq!(
            err.to_string(),
            "Index out of range: index 7 for list of length 3"
        );
    }

    #[test]
    fn test_empty_list_access_message() {
        let err = ListError::empty("front");
        assert_eq!(
            err.to_string(),
            "Empty list access: front requires a non-empty list"
        );
    }

    #[test]
    fn test_insert_error_converts_to_list_error() {
        let err = InsertError::new(None, ListError::OutOfRange { index: 1, length: 0 });
        assert_eq!(err.to_string(), "Index out of range: index 1 for list of length 0");
        let list_err: ListError = err.into();
        assert_eq!(list_err, ListError::OutOfRange { index: 1, length: 0 });
    }

    #[test]
    fn test_insert_error_chain_reports_cause_once() {
        let err = InsertError::new(None, ListError::OutOfRange { index: 3, length: 0 });
        assert!(std::error::Error::source(&err).is_none());

        let err = anyhow::Error::new(err).context("failed to insert 5@3");
        assert_eq!(
            format!("{:#}", err),
            "failed to insert 5@3: Index out of range: index 3 for list of length 0"
        );
    }
}
