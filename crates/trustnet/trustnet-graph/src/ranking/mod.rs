//! Influence ranking over the interaction graph.

pub mod pagerank;

pub use pagerank::{InfluenceResult, PageRankEngine};
