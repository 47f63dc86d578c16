//! Computing a combined view from document snapshots.
//!
//! [`compute`] is pure and synchronous. [`spawn_rediff`] runs it on the
//! tokio blocking pool so the thread that owns the viewer stays free; the
//! result is handed back and published with
//! [`OnesideViewer::apply`](crate::OnesideViewer::apply).

use std::fmt;
use std::sync::Arc;

use oneside_diff::{compare_lines, DiffError};
use oneside_fragment::{CombinedDiff, FragmentBuilder, FragmentError};
use oneside_types::{CancelFlag, TextDocument};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::error::{ViewerError, ViewerResult};
use crate::settings::ViewerSettings;

/// What the viewer shows after a rediff.
#[derive(Clone, Debug)]
pub enum ViewState {
    /// A combined view is available.
    Ready(Arc<CombinedDiff>),
    /// The comparison refused the input as too large.
    TooBig,
    /// The computation failed.
    Error(String),
}

impl ViewState {
    pub fn combined(&self) -> Option<&CombinedDiff> {
        match self {
            ViewState::Ready(diff) => Some(diff.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Ready(diff) if diff.is_equal => f.write_str("contents are identical"),
            ViewState::Ready(diff) => {
                let count = diff.blocks.len();
                write!(f, "{count} change{}", if count == 1 { "" } else { "s" })
            }
            ViewState::TooBig => f.write_str("content too big"),
            ViewState::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// Snapshots of both documents plus the settings to diff them with.
///
/// Callers capture both texts at the same point in time; the computation
/// never looks at live documents.
#[derive(Clone, Debug)]
pub struct RediffRequest {
    pub left: Option<TextDocument>,
    pub right: Option<TextDocument>,
    pub settings: ViewerSettings,
}

impl RediffRequest {
    pub fn new(left: Option<TextDocument>, right: Option<TextDocument>, settings: ViewerSettings) -> Self {
        Self { left, right, settings }
    }
}

/// Compare the snapshots and build the combined view.
///
/// Too-big input and build failures become [`ViewState::TooBig`] and
/// [`ViewState::Error`]; only cancellation is reported as an error.
pub fn compute(request: &RediffRequest, cancel: &CancelFlag) -> ViewerResult<ViewState> {
    cancel.check()?;
    let left = request.left.as_ref();
    let right = request.right.as_ref();

    let fragments = match compare_lines(left, right, &request.settings.compare_options(), cancel) {
        Ok(fragments) => fragments,
        Err(DiffError::TooBig { lines, limit }) => {
            warn!(lines, limit, "rediff skipped: content too big");
            return Ok(ViewState::TooBig);
        }
        Err(DiffError::Cancelled(cancelled)) => return Err(cancelled.into()),
    };
    cancel.check()?;

    match FragmentBuilder::new(&fragments, left, right, request.settings.build_options()).exec_with(cancel) {
        Ok(diff) => {
            debug!(blocks = diff.blocks.len(), lines = diff.line_count, "rediff complete");
            Ok(ViewState::Ready(Arc::new(diff)))
        }
        Err(FragmentError::Cancelled(cancelled)) => Err(cancelled.into()),
        Err(e) => {
            error!("rediff failed: {e}");
            Ok(ViewState::Error(e.to_string()))
        }
    }
}

/// A rediff running on the blocking pool.
pub struct RediffHandle {
    cancel: CancelFlag,
    task: JoinHandle<ViewerResult<ViewState>>,
}

impl RediffHandle {
    /// Ask the computation to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the outcome.
    pub async fn join(self) -> ViewerResult<ViewState> {
        self.task
            .await
            .map_err(|e| ViewerError::Worker(e.to_string()))?
    }
}

/// Start a rediff on the tokio blocking pool. Must be called from within a
/// tokio runtime.
pub fn spawn_rediff(request: RediffRequest) -> RediffHandle {
    spawn_rediff_with(request, CancelFlag::new())
}

/// Like [`spawn_rediff`], observing an existing cancel flag.
pub fn spawn_rediff_with(request: RediffRequest, cancel: CancelFlag) -> RediffHandle {
    let worker_flag = cancel.clone();
    let task = tokio::task::spawn_blocking(move || compute(&request, &worker_flag));
    RediffHandle { cancel, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneside_types::ContextRange;

    fn request(left: &str, right: &str) -> RediffRequest {
        RediffRequest::new(
            Some(TextDocument::new(left)),
            Some(TextDocument::new(right)),
            ViewerSettings {
                context_range: ContextRange::Lines(1),
                ..ViewerSettings::default()
            },
        )
    }

    #[test]
    fn compute_ready() {
        let state = compute(&request("a\nb\nc\nd\ne\n", "a\nx\nc\nd\ne\n"), &CancelFlag::new()).unwrap();
        let diff = state.combined().unwrap();
        assert_eq!(diff.lines().collect::<Vec<_>>(), vec!["a", "b", "x", "c"]);
        assert_eq!(state.to_string(), "1 change");
    }

    #[test]
    fn compute_equal() {
        let state = compute(&request("same\n", "same\n"), &CancelFlag::new()).unwrap();
        assert!(state.combined().unwrap().is_equal);
        assert_eq!(state.to_string(), "contents are identical");
    }

    #[test]
    fn compute_too_big() {
        let mut req = request("a\nb\n", "c\nd\n");
        req.settings.max_lines = 3;
        let state = compute(&req, &CancelFlag::new()).unwrap();
        assert!(matches!(state, ViewState::TooBig));
    }

    #[test]
    fn compute_without_documents_is_an_error_state() {
        let req = RediffRequest::new(None, None, ViewerSettings::default());
        let state = compute(&req, &CancelFlag::new()).unwrap();
        assert!(matches!(state, ViewState::Error(_)));
    }

    #[test]
    fn compute_cancelled() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let err = compute(&request("a\n", "b\n"), &cancel).unwrap_err();
        assert!(matches!(err, ViewerError::Cancelled(_)));
    }

    #[tokio::test]
    async fn spawned_rediff_completes() {
        let handle = spawn_rediff(request("a\nb\n", "a\nc\n"));
        let state = handle.join().await.unwrap();
        assert_eq!(state.combined().unwrap().blocks.len(), 1);
    }

    #[tokio::test]
    async fn spawned_rediff_observes_cancel() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let handle = spawn_rediff_with(request("a\n", "b\n"), cancel);
        let err = handle.join().await.unwrap_err();
        assert!(matches!(err, ViewerError::Cancelled(_)));
    }
}
