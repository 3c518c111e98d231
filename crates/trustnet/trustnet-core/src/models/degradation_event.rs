use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fallback taken during a run, e.g. neutral sentiment because the
/// classifier was unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    /// Number of records that received the fallback.
    pub affected: usize,
    pub timestamp: DateTime<Utc>,
}
