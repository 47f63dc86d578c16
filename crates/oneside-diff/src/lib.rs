//! Line comparison for the one-sided diff engine.
//!
//! Computes the ordered, non-overlapping [`LineFragment`] list the fragment
//! builder consumes, using the `similar` crate (Myers diff algorithm).
//! Replaced regions optionally carry character-level spans.
//!
//! # Key Types
//!
//! - [`compare_lines`] -- Line fragments between two documents
//! - [`CompareOptions`] / [`ComparisonPolicy`] -- Whitespace handling, inner spans, size limit
//! - [`DiffError`] -- Too-big input and cancellation
//!
//! [`LineFragment`]: oneside_types::LineFragment

pub mod compare;
pub mod error;
mod inner;

pub use compare::{compare_lines, CompareOptions, ComparisonPolicy};
pub use error::{DiffError, DiffResult};
