//! Interaction graph storage and its propagation view.

pub mod adjacency;
pub mod trust_graph;

pub use adjacency::Adjacency;
pub use trust_graph::{EntityNode, TrustEdge, TrustGraph, TrustStableGraph};
