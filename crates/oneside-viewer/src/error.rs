//! Error types for the viewer crate.

use std::path::PathBuf;

use oneside_types::Cancelled;

/// Errors that can occur in the viewer core.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// Reading a settings file failed.
    #[error("failed to read settings from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file did not parse.
    #[error("invalid settings: {0}")]
    Config(#[from] toml::de::Error),

    /// The rediff was cancelled before it produced a result.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    /// The background worker failed without producing a result.
    #[error("rediff worker failed: {0}")]
    Worker(String),
}

/// Convenience alias for viewer results.
pub type ViewerResult<T> = Result<T, ViewerError>;
