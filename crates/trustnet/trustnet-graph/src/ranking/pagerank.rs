//! Weighted PageRank by power iteration.
//!
//! ```text
//! PR'(v) = (1-d)/N + d * Σ PR(u) * w(u→v) / out(u) + d * dangling / N
//! ```
//!
//! `dangling` is the mass held by nodes with no propagating out-weight; it
//! is spread uniformly so every iterate sums to 1. Iteration stops when the
//! L1 change drops below the tolerance or the iteration cap is reached.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use trustnet_core::cancellation::CancellationToken;
use trustnet_core::config::RankingConfig;
use trustnet_core::constants::COMPONENT_RANKING;
use trustnet_core::errors::{GraphError, TrustNetResult};

use crate::graph::{Adjacency, TrustGraph};

/// Stationary distribution plus convergence diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceResult {
    /// Rank per node, in graph node order. Sums to 1.
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// L1 change of the last iteration.
    pub residual: f64,
    /// Total mass before the final renormalisation.
    pub raw_mass: f64,
}

impl InfluenceResult {
    fn empty() -> Self {
        Self {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
            residual: 0.0,
            raw_mass: 0.0,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}

pub struct PageRankEngine {
    config: RankingConfig,
}

impl PageRankEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn rank(&self, graph: &TrustGraph, cancel: &CancellationToken) -> TrustNetResult<InfluenceResult> {
        self.rank_adjacency(&Adjacency::from_graph(graph), cancel)
    }

    /// Run power iteration. `cancel` is checked before every iteration.
    pub fn rank_adjacency(
        &self,
        adjacency: &Adjacency,
        cancel: &CancellationToken,
    ) -> TrustNetResult<InfluenceResult> {
        let n = adjacency.node_count();
        if n == 0 {
            return Ok(InfluenceResult::empty());
        }

        let d = self.config.damping;
        let n_f = n as f64;
        let parallel = n >= self.config.parallel_threshold;
        let mut ranks = vec![1.0 / n_f; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut residual = f64::INFINITY;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            cancel.check(COMPONENT_RANKING)?;
            iterations += 1;

            let dangling: f64 = (0..n)
                .filter(|&v| adjacency.is_dangling(v))
                .map(|v| ranks[v])
                .sum();
            let base = (1.0 - d) / n_f + d * dangling / n_f;

            let update = |(v, slot): (usize, &mut f64)| {
                let inflow: f64 = adjacency
                    .incoming(v)
                    .iter()
                    .map(|&(u, p)| ranks[u] * p)
                    .sum();
                *slot = base + d * inflow;
            };
            if parallel {
                next.par_iter_mut().enumerate().for_each(update);
            } else {
                next.iter_mut().enumerate().for_each(update);
            }

            residual = ranks.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut ranks, &mut next);
            debug!(iteration = iterations, residual, "pagerank iteration");

            if residual < self.config.tolerance {
                converged = true;
                break;
            }
        }

        let raw_mass: f64 = ranks.iter().sum();
        if !(raw_mass.is_finite() && raw_mass > 0.0) {
            return Err(GraphError::InvalidRankMass { total: raw_mass }.into());
        }
        for rank in &mut ranks {
            *rank /= raw_mass;
        }

        if converged {
            info!(nodes = n, iterations, residual, "pagerank converged");
        } else {
            warn!(
                nodes = n,
                iterations,
                residual,
                tolerance = self.config.tolerance,
                "pagerank hit iteration cap"
            );
        }

        Ok(InfluenceResult {
            scores: ranks,
            iterations,
            converged,
            residual,
            raw_mass,
        })
    }
}
