//! # trustnet-scoring
//!
//! Turns PageRank mass and endorsement sentiment into per-entity
//! [`ScoreRecord`](trustnet_core::models::ScoreRecord)s on a 0–100 scale.

pub mod aggregate;
pub mod hybrid;

pub use aggregate::{aggregate_activity, NodeActivity};
pub use hybrid::{normalize_ranks, HybridScorer};
