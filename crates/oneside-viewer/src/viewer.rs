use oneside_fragment::CombinedDiff;
use oneside_types::Side;
use tracing::info;

use crate::error::{ViewerError, ViewerResult};
use crate::rediff::ViewState;
use crate::transfer::{self, Transfer};

/// The published state of a one-sided diff view.
///
/// Owned by a single thread. Background rediffs hand their outcome to
/// [`apply`](Self::apply), which replaces the state wholesale; a cancelled
/// rediff leaves the previous state untouched.
#[derive(Debug)]
pub struct OnesideViewer {
    state: Option<ViewState>,
    master_side: Side,
}

impl OnesideViewer {
    pub fn new(master_side: Side) -> Self {
        Self {
            state: None,
            master_side,
        }
    }

    pub fn master_side(&self) -> Side {
        self.master_side
    }

    /// Change the preferred side. Affects later translations only.
    pub fn set_master_side(&mut self, side: Side) {
        self.master_side = side;
    }

    pub fn state(&self) -> Option<&ViewState> {
        self.state.as_ref()
    }

    /// The published combined view, if the last rediff produced one.
    pub fn combined(&self) -> Option<&CombinedDiff> {
        self.state.as_ref().and_then(ViewState::combined)
    }

    /// Publish a rediff outcome.
    ///
    /// Returns `false` when the outcome was a cancellation and nothing
    /// changed. Worker failures publish [`ViewState::Error`].
    pub fn apply(&mut self, outcome: ViewerResult<ViewState>) -> bool {
        let state = match outcome {
            Ok(state) => state,
            Err(ViewerError::Cancelled(_)) => return false,
            Err(e) => ViewState::Error(e.to_string()),
        };
        info!("publishing diff view: {state}");
        self.state = Some(state);
        true
    }

    /// Drop the published state.
    pub fn clear(&mut self) {
        self.state = None;
    }

    pub fn to_combined(&self, side: Side, line: usize) -> usize {
        transfer::to_combined(self.combined(), side, line)
    }

    pub fn from_combined(&self, line: usize) -> Transfer {
        transfer::from_combined(self.combined(), self.master_side, line)
    }

    pub fn from_combined_strict(&self, side: Side, line: usize) -> Option<usize> {
        transfer::from_combined_strict(self.combined(), side, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rediff::{compute, RediffRequest};
    use crate::settings::ViewerSettings;
    use oneside_types::{CancelFlag, Cancelled, TextDocument};

    fn ready(left: &str, right: &str) -> ViewerResult<ViewState> {
        let request = RediffRequest::new(
            Some(TextDocument::new(left)),
            Some(TextDocument::new(right)),
            ViewerSettings::default(),
        );
        compute(&request, &CancelFlag::new())
    }

    #[test]
    fn fresh_viewer_translates_identically() {
        let viewer = OnesideViewer::new(Side::Right);
        assert!(viewer.state().is_none());
        assert_eq!(viewer.to_combined(Side::Left, 3), 3);
        assert_eq!(viewer.from_combined(3).line, 3);
        assert_eq!(viewer.from_combined(3).side, Side::Right);
    }

    #[test]
    fn apply_publishes_and_cancel_keeps_previous() {
        let mut viewer = OnesideViewer::new(Side::Right);
        assert!(viewer.apply(ready("a\nb\n", "a\nc\n")));
        let before = viewer.combined().unwrap().text.clone();

        assert!(!viewer.apply(Err(ViewerError::Cancelled(Cancelled))));
        assert_eq!(viewer.combined().unwrap().text, before);
    }

    #[test]
    fn worker_failure_becomes_error_state() {
        let mut viewer = OnesideViewer::new(Side::Left);
        viewer.apply(ready("a\n", "b\n"));
        assert!(viewer.apply(Err(ViewerError::Worker("panicked".into()))));
        assert!(matches!(viewer.state(), Some(ViewState::Error(_))));
        assert!(viewer.combined().is_none());
        assert_eq!(viewer.to_combined(Side::Left, 5), 5);
    }

    #[test]
    fn master_side_preference_applies_to_later_calls() {
        let mut viewer = OnesideViewer::new(Side::Left);
        viewer.apply(ready("a\nb\n", "a\nc\n"));
        assert_eq!(viewer.from_combined(0).side, Side::Left);
        viewer.set_master_side(Side::Right);
        assert_eq!(viewer.from_combined(0).side, Side::Right);
        // Changed lines still belong to their own side.
        assert_eq!(viewer.from_combined(1).side, Side::Left);
        assert_eq!(viewer.from_combined_strict(Side::Right, 2), Some(1));
    }

    #[test]
    fn clear_resets_to_identity() {
        let mut viewer = OnesideViewer::new(Side::Left);
        viewer.apply(ready("a\nb\n", "x\nb\n"));
        assert_eq!(viewer.to_combined(Side::Right, 0), 1);
        viewer.clear();
        assert_eq!(viewer.to_combined(Side::Right, 0), 0);
    }
}
