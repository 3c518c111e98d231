//! # trustnet-graph
//!
//! Builds the weighted directed interaction graph and ranks entities with
//! PageRank.

pub mod builder;
pub mod graph;
pub mod ranking;

pub use builder::GraphBuilder;
pub use graph::{Adjacency, TrustEdge, TrustGraph};
pub use ranking::{InfluenceResult, PageRankEngine};
