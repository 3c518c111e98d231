//! Phase 4: Ranking. PageRank over the propagating edges.

use trustnet_core::cancellation::CancellationToken;
use trustnet_core::config::RankingConfig;
use trustnet_core::errors::TrustNetResult;
use trustnet_graph::{InfluenceResult, PageRankEngine, TrustGraph};
use trustnet_observability::ranking_span;
use trustnet_observability::tracing_setup::events;

pub fn rank(
    graph: &TrustGraph,
    config: &RankingConfig,
    cancel: &CancellationToken,
) -> TrustNetResult<InfluenceResult> {
    let span = ranking_span!(graph.node_count(), config.damping);
    let _guard = span.enter();

    let influence = PageRankEngine::new(config.clone()).rank(graph, cancel)?;
    if !influence.converged {
        events::ranking_not_converged(influence.iterations, influence.residual, config.tolerance);
    }
    Ok(influence)
}
