//! Dense, position-indexed view of the propagating part of the graph.
//!
//! Positions follow node insertion order. Self-loops and edges with
//! weight <= 0 are dropped; what remains is stored as incoming transition
//! probabilities so PageRank never divides inside its loop. Each source's
//! weights are scaled by its largest outgoing weight before summing, so the
//! out-weight total cannot overflow.

use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use super::TrustGraph;

#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    /// For each target position, `(source position, transition probability)`
    /// sorted by source.
    incoming: Vec<Vec<(usize, f64)>>,
    /// Nodes with no propagating out-weight.
    dangling: Vec<bool>,
}

impl Adjacency {
    pub fn from_graph(graph: &TrustGraph) -> Self {
        let positions: HashMap<NodeIndex, usize> = graph
            .graph
            .node_indices()
            .enumerate()
            .map(|(pos, idx)| (idx, pos))
            .collect();
        let n = positions.len();

        let mut out_max = vec![0.0_f64; n];
        let mut edges = Vec::new();
        for edge in graph.graph.edge_references() {
            if edge.source() == edge.target() || !edge.weight().propagates() {
                continue;
            }
            let (Some(&u), Some(&v)) = (positions.get(&edge.source()), positions.get(&edge.target()))
            else {
                continue;
            };
            out_max[u] = out_max[u].max(edge.weight().weight);
            edges.push((u, v, edge.weight().weight));
        }

        let mut out_weight = vec![0.0; n];
        for &(u, _, w) in &edges {
            out_weight[u] += w / out_max[u];
        }

        let mut incoming = vec![Vec::new(); n];
        for (u, v, w) in edges {
            incoming[v].push((u, w / out_max[u] / out_weight[u]));
        }
        for list in &mut incoming {
            list.sort_by_key(|&(u, _)| u);
        }
        let dangling = out_weight.iter().map(|&w| w <= 0.0).collect();

        Self { incoming, dangling }
    }

    pub fn node_count(&self) -> usize {
        self.incoming.len()
    }

    pub fn incoming(&self, position: usize) -> &[(usize, f64)] {
        &self.incoming[position]
    }

    pub fn is_dangling(&self, position: usize) -> bool {
        self.dangling[position]
    }

    pub fn dangling_count(&self) -> usize {
        self.dangling.iter().filter(|d| **d).count()
    }

    /// Number of propagating edges.
    pub fn edge_count(&self) -> usize {
        self.incoming.iter().map(Vec::len).sum()
    }
}
