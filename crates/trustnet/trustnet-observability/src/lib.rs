//! # trustnet-observability
//!
//! Structured tracing with span definitions, per-run metrics, and
//! degradation event tracking for the scoring pipeline.

pub mod degradation;
pub mod metrics;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use metrics::{PhaseTiming, RunMetrics};
