use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

/// Signal raised when a computation observes its [`CancelFlag`].
#[derive(Clone, Copy, Debug, Default, Error, PartialEq, Eq)]
#[error("computation cancelled")]
pub struct Cancelled;

/// Cooperative cancellation flag.
///
/// Clones share the same flag: the orchestrator keeps one copy and hands the
/// other to the worker, which polls [`check`](CancelFlag::check) at coarse
/// checkpoints.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Returns `Err(Cancelled)` once cancellation was requested.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
