//! Foundation types for the one-sided diff engine.
//!
//! This crate provides the vocabulary shared by the convertor, the fragment
//! builder, the comparison adapter and the viewer. Every other `oneside`
//! crate depends on `oneside-types`.
//!
//! # Key Types
//!
//! - [`Side`] -- Left (document 1) or right (document 2)
//! - [`LineFragment`] / [`DiffFragment`] -- Line-level hunks with optional character spans
//! - [`LineSource`] / [`TextDocument`] -- Line-addressable text snapshots
//! - [`ContextRange`] -- Unchanged lines kept around a change, or unlimited
//! - [`CancelFlag`] -- Cooperative cancellation shared with a background worker

pub mod cancel;
pub mod context;
pub mod document;
pub mod error;
pub mod fragment;
pub mod side;

pub use cancel::{CancelFlag, Cancelled};
pub use context::ContextRange;
pub use document::{LineSource, TextDocument};
pub use error::TypeError;
pub use fragment::{DiffFragment, LineFragment, LineRange};
pub use side::Side;
