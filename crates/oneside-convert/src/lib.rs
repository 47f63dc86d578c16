//! Line-number convertors for the one-sided diff view.
//!
//! A combined view interleaves runs of lines taken from two documents. Each
//! run is registered once with a [`ConvertorBuilder`]; the builder then
//! produces a forward convertor (combined line to original line) and an
//! inverted one (original line to combined line), each holding one interval
//! map per [`Side`](oneside_types::Side).
//!
//! # Lookup conventions
//!
//! The two directions report a miss differently, and callers rely on it:
//!
//! - [`LineNumberConvertor::get`] returns `None` for an unmapped line.
//! - [`InvertedLineNumberConvertor::get`] returns `0` for an unmapped line.

pub mod convertor;
mod interval;

pub use convertor::{ConvertorBuilder, InvertedLineNumberConvertor, LineNumberConvertor};
