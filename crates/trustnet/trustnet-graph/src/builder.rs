//! Graph construction from validated interactions.
//!
//! 1. Base weight from the kind table, or the interaction's weight hint.
//! 2. Endorsements are scaled by `max(0, 1 + magnitude)`.
//! 3. Contributions to the same ordered pair are summed.
//!
//! Nodes are inserted in sorted id order and each edge's contributions are
//! summed in sorted order, so the graph does not depend on input order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::info;

use trustnet_core::config::GraphConfig;
use trustnet_core::interaction::{Interaction, InteractionId, InteractionKind};
use trustnet_core::models::SentimentScore;

use crate::graph::TrustGraph;

pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Weight one interaction contributes to its edge.
    pub fn contribution_weight(&self, interaction: &Interaction, sentiment: Option<&SentimentScore>) -> f64 {
        let base = interaction
            .weight_hint()
            .unwrap_or_else(|| self.config.base_weight(interaction.kind()));
        match interaction.kind() {
            InteractionKind::Endorsement => {
                let magnitude = sentiment.map(|s| s.magnitude).unwrap_or(0.0);
                base * (1.0 + magnitude).max(0.0)
            }
            _ => base,
        }
    }

    /// Build the graph. Endorsements missing from `sentiment` count as neutral.
    pub fn build(
        &self,
        interactions: &[Interaction],
        sentiment: &HashMap<InteractionId, SentimentScore>,
    ) -> TrustGraph {
        let mut entities: BTreeSet<&str> = BTreeSet::new();
        let mut contributions: BTreeMap<(&str, &str), Vec<(InteractionKind, f64)>> = BTreeMap::new();

        for interaction in interactions {
            entities.insert(interaction.from_id());
            entities.insert(interaction.to_id());
            let weight = self.contribution_weight(interaction, sentiment.get(&interaction.id()));
            contributions
                .entry((interaction.from_id(), interaction.to_id()))
                .or_default()
                .push((interaction.kind(), weight));
        }

        let mut graph = TrustGraph::new();
        for entity in &entities {
            graph.ensure_node(entity);
        }
        for ((from, to), mut parts) in contributions {
            parts.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
            for (kind, weight) in parts {
                graph.add_contribution(from, to, kind, weight);
            }
        }

        let stats = graph.stats();
        info!(
            nodes = stats.node_count,
            edges = stats.edge_count,
            self_loops = stats.self_loop_count,
            excluded = stats.excluded_edge_count,
            "interaction graph built"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustnet_core::interaction::InteractionPayload;
    use trustnet_core::models::SentimentLabel;

    fn score(magnitude: f64) -> SentimentScore {
        SentimentScore::from_magnitude(magnitude, 0.05)
    }

    #[test]
    fn kind_table_and_hint() {
        let builder = GraphBuilder::new(GraphConfig::default());
        let collab = Interaction::collaboration(0, "a", "b").unwrap();
        let profile = Interaction::profile(1, "a").unwrap();
        let hinted =
            Interaction::with_weight_hint(InteractionId(2), "a", "b", InteractionPayload::Other, 4.0)
                .unwrap();
        assert_eq!(builder.contribution_weight(&collab, None), 1.0);
        assert_eq!(builder.contribution_weight(&profile, None), 0.1);
        assert_eq!(builder.contribution_weight(&hinted, None), 4.0);
    }

    #[test]
    fn endorsement_scaled_by_sentiment() {
        let builder = GraphBuilder::new(GraphConfig::default());
        let e = Interaction::endorsement(0, "a", "b", "great").unwrap();
        assert!((builder.contribution_weight(&e, Some(&score(0.5))) - 1.5).abs() < 1e-12);
        assert_eq!(builder.contribution_weight(&e, Some(&score(-1.0))), 0.0);
        assert_eq!(builder.contribution_weight(&e, None), 1.0);
        assert_eq!(score(-1.0).label, SentimentLabel::Negative);
    }

    #[test]
    fn nodes_are_sorted_regardless_of_input_order() {
        let builder = GraphBuilder::new(GraphConfig::default());
        let interactions = vec![
            Interaction::collaboration(0, "zed", "alice").unwrap(),
            Interaction::collaboration(1, "mike", "zed").unwrap(),
        ];
        let graph = builder.build(&interactions, &HashMap::new());
        let ids: Vec<&str> = graph.entity_ids().collect();
        assert_eq!(ids, vec!["alice", "mike", "zed"]);
    }

    #[test]
    fn repeated_pairs_merge() {
        let builder = GraphBuilder::new(GraphConfig::default());
        let interactions = vec![
            Interaction::collaboration(0, "a", "b").unwrap(),
            Interaction::endorsement(1, "a", "b", "").unwrap(),
            Interaction::collaboration(2, "a", "b").unwrap(),
        ];
        let graph = builder.build(&interactions, &HashMap::new());
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge("a", "b").unwrap();
        assert!((edge.weight - 3.0).abs() < 1e-12);
        assert_eq!(edge.count(InteractionKind::Collaboration), 2);
        assert_eq!(edge.count(InteractionKind::Endorsement), 1);
    }
}
