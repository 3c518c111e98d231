//! # trustnet-pipeline
//!
//! Runs a full scoring pass over an interaction snapshot:
//! validation → sentiment → graph → PageRank → hybrid scoring.
//!
//! Every run rebuilds all state from its input. Nothing computed in one
//! run is visible to another.

pub mod engine;
pub mod output;
pub mod pipeline;

pub use engine::TrustPipeline;
pub use output::{PipelineOutput, ScoreSet};
