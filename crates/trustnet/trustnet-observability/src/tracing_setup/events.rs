//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a scoring run.
pub fn run_started(run_id: &str, input_count: usize) {
    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        input_count = input_count,
        "scoring run started"
    );
}

/// Log a batch of rejected interaction records.
pub fn records_rejected(run_id: &str, rejected: usize, accepted: usize) {
    tracing::warn!(
        event = "records_rejected",
        run_id = %run_id,
        rejected = rejected,
        accepted = accepted,
        "interaction records failed validation"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str, affected: usize) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        affected = affected,
        "degradation triggered"
    );
}

/// Log PageRank hitting its iteration cap.
pub fn ranking_not_converged(iterations: usize, residual: f64, tolerance: f64) {
    tracing::warn!(
        event = "ranking_not_converged",
        iterations = iterations,
        residual = residual,
        tolerance = tolerance,
        "pagerank stopped at iteration cap without converging"
    );
}

/// Log a completed scoring run.
pub fn run_completed(run_id: &str, node_count: usize, converged: bool, duration_ms: u64) {
    tracing::info!(
        event = "run_completed",
        run_id = %run_id,
        node_count = node_count,
        converged = converged,
        duration_ms = duration_ms,
        "scoring run completed"
    );
}

/// Log a cancelled scoring run.
pub fn run_cancelled(run_id: &str, stage: &str) {
    tracing::warn!(
        event = "run_cancelled",
        run_id = %run_id,
        stage = %stage,
        "scoring run cancelled"
    );
}
