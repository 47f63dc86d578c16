use thiserror::Error;

/// Errors produced by type conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid context range: {0} (expected -1 or a non-negative count)")]
    InvalidContextRange(i64),
}
