//! Viewer core for the one-sided diff.
//!
//! Ties the comparison and the fragment builder together behind a viewer
//! that publishes results wholesale, and translates line numbers between
//! the combined view and either document.
//!
//! # Key Types
//!
//! - [`OnesideViewer`] -- Holds the published [`ViewState`] and the master side preference
//! - [`ViewerSettings`] -- Context range, inline highlighting, master side, limits (TOML)
//! - [`RediffRequest`] / [`RediffHandle`] -- Snapshot input and background computation
//! - [`Transfer`] -- Result of translating a combined line back to a document

pub mod error;
pub mod rediff;
pub mod settings;
pub mod transfer;
pub mod viewer;

pub use error::{ViewerError, ViewerResult};
pub use rediff::{compute, spawn_rediff, spawn_rediff_with, RediffHandle, RediffRequest, ViewState};
pub use settings::ViewerSettings;
pub use transfer::{from_combined, from_combined_strict, to_combined, Transfer};
pub use viewer::OnesideViewer;
