//! Error types for the fragment builder.

use oneside_types::Cancelled;

/// Errors that can occur while building a combined view.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FragmentError {
    /// The computation observed its cancel flag. Nothing was produced.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    /// Both documents were absent; at least one side must be present.
    #[error("no documents to combine: both sides are absent")]
    NoDocuments,
}

/// Convenience alias for builder results.
pub type FragmentResult<T> = Result<T, FragmentError>;
