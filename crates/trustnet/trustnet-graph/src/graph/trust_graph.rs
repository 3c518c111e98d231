//! petgraph::StableGraph wrapper with EntityNode and TrustEdge types.

use std::collections::{BTreeMap, HashMap};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Directed;
use serde::{Deserialize, Serialize};

use trustnet_core::interaction::InteractionKind;
use trustnet_core::models::GraphStats;

/// A node in the interaction graph: one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
    pub entity_id: String,
}

/// Aggregate of every interaction from one entity to another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustEdge {
    /// Sum of contribution weights.
    pub weight: f64,
    pub count_by_kind: BTreeMap<InteractionKind, usize>,
}

impl TrustEdge {
    /// Whether this edge carries rank when it is not a self-loop.
    /// Overflowed weights are kept for audit only.
    pub fn propagates(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }

    pub fn count(&self, kind: InteractionKind) -> usize {
        self.count_by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn interaction_count(&self) -> usize {
        self.count_by_kind.values().sum()
    }
}

/// The underlying directed graph type.
pub type TrustStableGraph = StableGraph<EntityNode, TrustEdge, Directed>;

/// Wrapper providing indexed access to the interaction graph.
#[derive(Debug, Clone)]
pub struct TrustGraph {
    pub graph: TrustStableGraph,
    /// Map from entity id to NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl TrustGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create the node for `entity_id`.
    pub fn ensure_node(&mut self, entity_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(entity_id) {
            return idx;
        }
        let idx = self.graph.add_node(EntityNode {
            entity_id: entity_id.to_string(),
        });
        self.node_index.insert(entity_id.to_string(), idx);
        idx
    }

    pub fn get_node(&self, entity_id: &str) -> Option<NodeIndex> {
        self.node_index.get(entity_id).copied()
    }

    /// Add `weight` for one interaction of `kind` to the edge `from -> to`,
    /// creating nodes and the edge as needed.
    pub fn add_contribution(&mut self, from: &str, to: &str, kind: InteractionKind, weight: f64) {
        let source = self.ensure_node(from);
        let target = self.ensure_node(to);
        let edge = match self.graph.find_edge(source, target) {
            Some(e) => e,
            None => self.graph.add_edge(source, target, TrustEdge::default()),
        };
        if let Some(data) = self.graph.edge_weight_mut(edge) {
            data.weight += weight;
            *data.count_by_kind.entry(kind).or_insert(0) += 1;
        }
    }

    /// Edge data for `from -> to`, if any interaction connected them.
    pub fn edge(&self, from: &str, to: &str) -> Option<&TrustEdge> {
        let source = self.get_node(from)?;
        let target = self.get_node(to)?;
        let edge = self.graph.find_edge(source, target)?;
        self.graph.edge_weight(edge)
    }

    /// Entity ids in node insertion order.
    pub fn entity_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(|n| n.entity_id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            ..GraphStats::default()
        };
        for edge in self.graph.edge_references() {
            if edge.source() == edge.target() {
                stats.self_loop_count += 1;
            } else if edge.weight().propagates() {
                stats.propagating_edge_count += 1;
            } else {
                stats.excluded_edge_count += 1;
            }
        }
        stats
    }
}

impl Default for TrustGraph {
    fn default() -> Self {
        Self::new()
    }
}
