//! Error types for the comparison crate.

use oneside_types::Cancelled;

/// Errors that can occur during comparison.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The inputs exceed the configured line limit.
    #[error("content too big to compare: {lines} lines (limit {limit})")]
    TooBig { lines: usize, limit: usize },

    /// The comparison observed its cancel flag.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// Convenience alias for comparison results.
pub type DiffResult<T> = Result<T, DiffError>;
