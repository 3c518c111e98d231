//! Phase 5: Hybrid scoring. Scaled rank plus sentiment boost per entity.

use std::collections::HashMap;

use trustnet_core::config::TrustNetConfig;
use trustnet_core::errors::TrustNetResult;
use trustnet_core::interaction::{Interaction, InteractionId};
use trustnet_core::models::{ScoreRecord, SentimentScore};
use trustnet_graph::{InfluenceResult, TrustGraph};
use trustnet_observability::scoring_span;
use trustnet_scoring::{aggregate_activity, HybridScorer};

pub fn score(
    interactions: &[Interaction],
    graph: &TrustGraph,
    influence: &InfluenceResult,
    sentiment: &HashMap<InteractionId, SentimentScore>,
    config: &TrustNetConfig,
) -> TrustNetResult<Vec<ScoreRecord>> {
    let span = scoring_span!(graph.node_count());
    let _guard = span.enter();

    let activity = aggregate_activity(interactions, sentiment);
    HybridScorer::new(config.scoring.clone(), config.sentiment.neutral_band).score(
        graph.entity_ids(),
        influence,
        &activity,
    )
}
