//! Phase 3: Graph. Weighted edges from interactions and sentiment.

use std::collections::HashMap;

use trustnet_core::config::GraphConfig;
use trustnet_core::interaction::{Interaction, InteractionId};
use trustnet_core::models::SentimentScore;
use trustnet_graph::{GraphBuilder, TrustGraph};
use trustnet_observability::graph_span;

pub fn build(
    interactions: &[Interaction],
    config: &GraphConfig,
    sentiment: &HashMap<InteractionId, SentimentScore>,
) -> TrustGraph {
    let span = graph_span!(interactions.len());
    let _guard = span.enter();
    GraphBuilder::new(config.clone()).build(interactions, sentiment)
}
