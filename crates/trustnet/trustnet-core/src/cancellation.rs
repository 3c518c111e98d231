//! Cooperative cancellation for scoring runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::{TrustNetError, TrustNetResult};

/// A cancellation handle shared between the caller and a running pipeline.
///
/// Wraps an `AtomicBool` that can be shared across threads. The pipeline
/// checks it between sentiment batches and between PageRank iterations.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token (not cancelled).
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Return `Cancelled` for `stage` if cancellation has been requested.
    pub fn check(&self, stage: &str) -> TrustNetResult<()> {
        if self.is_cancelled() {
            return Err(TrustNetError::Cancelled {
                stage: stage.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
