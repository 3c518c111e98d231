//! 5-phase scoring pipeline.
//!
//! Phase 1: Validation → Phase 2: Sentiment → Phase 3: Graph →
//! Phase 4: Ranking → Phase 5: Hybrid scoring

pub mod phase1_validation;
pub mod phase2_sentiment;
pub mod phase3_graph;
pub mod phase4_ranking;
pub mod phase5_hybrid;

use tracing::info;

use trustnet_core::cancellation::CancellationToken;
use trustnet_core::config::TrustNetConfig;
use trustnet_core::errors::TrustNetResult;
use trustnet_core::interaction::Interaction;
use trustnet_core::models::{DegradationEvent, GraphStats, ScoreRecord};
use trustnet_observability::RunMetrics;
use trustnet_sentiment::SentimentScorer;

/// Phases 2–5 over an already validated batch.
pub struct ScoredBatch {
    pub records: Vec<ScoreRecord>,
    pub graph: GraphStats,
    pub iterations: usize,
    pub converged: bool,
    pub residual: f64,
    pub degradations: Vec<DegradationEvent>,
}

impl ScoredBatch {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            graph: GraphStats::default(),
            iterations: 0,
            converged: true,
            residual: 0.0,
            degradations: Vec::new(),
        }
    }
}

/// Run phases 2–5 over `interactions`.
pub fn run_pipeline(
    interactions: &[Interaction],
    config: &TrustNetConfig,
    scorer: &SentimentScorer,
    metrics: &mut RunMetrics,
    cancel: &CancellationToken,
) -> TrustNetResult<ScoredBatch> {
    if interactions.is_empty() {
        info!("no valid interactions, nothing to score");
        return Ok(ScoredBatch::empty());
    }

    // Phase 2: Sentiment.
    metrics.enter("sentiment");
    let sentiment = phase2_sentiment::score(interactions, scorer, cancel)?;

    // Phase 3: Graph.
    metrics.enter("graph");
    let graph = phase3_graph::build(interactions, &config.graph, &sentiment.scores);
    let stats = graph.stats();

    // Phase 4: Ranking.
    metrics.enter("ranking");
    let influence = phase4_ranking::rank(&graph, &config.ranking, cancel)?;

    // Phase 5: Hybrid scoring.
    metrics.enter("scoring");
    let records = phase5_hybrid::score(
        interactions,
        &graph,
        &influence,
        &sentiment.scores,
        config,
    )?;

    Ok(ScoredBatch {
        records,
        graph: stats,
        iterations: influence.iterations,
        converged: influence.converged,
        residual: influence.residual,
        degradations: sentiment.degradations,
    })
}
