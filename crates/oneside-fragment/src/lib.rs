//! One-sided diff merge engine.
//!
//! Given two versions of a document and the ordered list of line fragments
//! that separate them, [`FragmentBuilder`] produces a single combined text
//! that shows shared context once and both sides of every change, along
//! with the line-number convertors needed to move between the combined view
//! and either original document.
//!
//! # Key Types
//!
//! - [`FragmentBuilder`] -- Single-use builder, consumed by [`FragmentBuilder::exec`]
//! - [`BuildOptions`] -- Context range, inline highlighting, master side
//! - [`CombinedDiff`] -- The combined text plus blocks, separators and convertors
//! - [`ChangedBlock`] / [`HighlightRange`] -- Per-change and per-run metadata

pub mod builder;
pub mod combined;
pub mod error;

pub use builder::{BuildOptions, FragmentBuilder};
pub use combined::{ChangedBlock, CombinedDiff, HighlightRange};
pub use error::{FragmentError, FragmentResult};
