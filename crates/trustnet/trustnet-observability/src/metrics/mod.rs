//! Per-run metrics: phase timings and graph size.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Wall-clock time spent in one pipeline phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTiming {
    pub phase: String,
    pub duration_ms: u64,
}

/// Collects timings for one run.
#[derive(Debug)]
pub struct RunMetrics {
    started: Instant,
    current: Option<(String, Instant)>,
    phases: Vec<PhaseTiming>,
}

impl RunMetrics {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            current: None,
            phases: Vec::new(),
        }
    }

    /// Close the running phase (if any) and open `phase`.
    pub fn enter(&mut self, phase: &str) {
        self.close_current();
        self.current = Some((phase.to_string(), Instant::now()));
    }

    /// Close the running phase and return every timing recorded so far.
    pub fn finish(&mut self) -> &[PhaseTiming] {
        self.close_current();
        &self.phases
    }

    pub fn phases(&self) -> &[PhaseTiming] {
        &self.phases
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn close_current(&mut self) {
        if let Some((phase, since)) = self.current.take() {
            let duration_ms = u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX);
            tracing::debug!(phase = %phase, duration_ms, "phase finished");
            self.phases.push(PhaseTiming { phase, duration_ms });
        }
    }
}
