//! Bounded, caller-owned history of the fallbacks taken by pipeline runs.
//!
//! The pipeline never holds one of these: each run reports its own
//! degradations in its `RunReport`, and a long-lived caller feeds those
//! reports in with [`DegradationTracker::observe`].

use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trustnet_core::models::{DegradationEvent, RunReport};

/// Entries kept when no capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    Active,
    /// A later run of the same component completed without falling back.
    Recovered,
}

/// One degradation, tagged with the run that hit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub run_id: String,
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct DegradationTracker {
    capacity: usize,
    entries: VecDeque<TrackedDegradation>,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// History holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Fold one finished run into the history.
    ///
    /// Every component the run degraded gets a new active entry. Active
    /// entries for components the run did not degrade are marked recovered.
    pub fn observe(&mut self, report: &RunReport) {
        let degraded: BTreeSet<&str> = report
            .degradations
            .iter()
            .map(|e| e.component.as_str())
            .collect();

        let now = Utc::now();
        for tracked in &mut self.entries {
            if tracked.recovery_status == RecoveryStatus::Active
                && !degraded.contains(tracked.event.component.as_str())
            {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(now);
            }
        }

        for event in &report.degradations {
            self.push(TrackedDegradation {
                run_id: report.run_id.clone(),
                event: event.clone(),
                recovery_status: RecoveryStatus::Active,
                recovered_at: None,
            });
        }
    }

    /// At capacity the oldest recovered entry goes first, then the oldest
    /// entry overall.
    fn push(&mut self, tracked: TrackedDegradation) {
        if self.entries.len() >= self.capacity {
            let victim = self
                .entries
                .iter()
                .position(|t| t.recovery_status == RecoveryStatus::Recovered)
                .unwrap_or(0);
            self.entries.remove(victim);
        }
        self.entries.push_back(tracked);
    }

    pub fn entries(&self) -> impl Iterator<Item = &TrackedDegradation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.entries
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    /// Whether `component` currently has an unrecovered degradation.
    pub fn is_degraded(&self, component: &str) -> bool {
        self.entries.iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }
}
