use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DegradationEvent, GraphStats};
use crate::errors::ValidationError;

/// Diagnostics for one completed scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    /// Order-independent digest of the accepted interactions.
    pub snapshot_digest: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub input_count: usize,
    pub accepted_count: usize,
    pub rejected: Vec<ValidationError>,
    pub graph: GraphStats,
    pub iterations: usize,
    pub converged: bool,
    /// L1 change of the last PageRank iteration.
    pub residual: f64,
    pub degradations: Vec<DegradationEvent>,
}

impl RunReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}
