//! Degradation history across runs.

mod tracker;

pub use tracker::{
    DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_HISTORY_CAPACITY,
};
