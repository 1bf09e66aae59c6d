//! Error types for the todo store.
//!
//! Both error classes are expected, user-triggerable conditions: a
//! missing record translates to a 404-equivalent at the boundary, a text
//! rule violation to a 400-equivalent. Neither is retried and neither
//! leaves the store in a changed state.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No todo with the given id exists.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// Supplied text is empty after trimming surrounding whitespace.
    #[error("todo text must not be empty")]
    EmptyText,

    /// Supplied text exceeds the maximum length.
    #[error("todo text must be at most {max} characters, got {len}")]
    TextTooLong { len: usize, max: usize },
}

impl StoreError {
    /// Whether this is a text-validation failure, as opposed to a missing
    /// record. Adapters use this for the 400-vs-404 split.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::EmptyText | StoreError::TextTooLong { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
