use serde::{Deserialize, Serialize};

use super::defaults;

/// PageRank configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Probability of following an edge instead of teleporting.
    pub damping: f64,
    /// L1 change between successive iterates below which the run has converged.
    pub tolerance: f64,
    /// Hard cap on power iterations.
    pub max_iterations: usize,
    /// Node count at which per-iteration updates are spread over the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping: defaults::DEFAULT_DAMPING,
            tolerance: defaults::DEFAULT_TOLERANCE,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
