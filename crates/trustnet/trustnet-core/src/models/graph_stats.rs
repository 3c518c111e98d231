use serde::{Deserialize, Serialize};

/// Shape of the interaction graph built for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    /// Distinct ordered pairs, self-loops included.
    pub edge_count: usize,
    pub self_loop_count: usize,
    /// Cross-entity edges with aggregate weight <= 0 (kept for audit only).
    pub excluded_edge_count: usize,
    /// Edges that propagate rank.
    pub propagating_edge_count: usize,
}
