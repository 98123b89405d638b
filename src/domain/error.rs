//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors raised by tree queries and mutations.
///
/// Every operation that presupposes at least one node fails with
/// [`TreeError::EmptyTree`]; `add` and `clear` never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Binary Tree is empty")]
    EmptyTree,

    #[error("Element not found in the tree")]
    ElementNotFound,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
