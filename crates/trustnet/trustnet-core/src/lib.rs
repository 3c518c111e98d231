//! # trustnet-core
//!
//! Foundation crate for the TrustNet scoring pipeline.
//! Defines interactions, result models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cancellation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod interaction;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancellation::CancellationToken;
pub use config::TrustNetConfig;
pub use errors::{TrustNetError, TrustNetResult};
pub use interaction::{Interaction, InteractionId, InteractionKind, InteractionPayload, RawInteraction};
pub use models::{ScoreRecord, SentimentLabel, SentimentScore};
