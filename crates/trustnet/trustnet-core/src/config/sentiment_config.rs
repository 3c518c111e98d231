use serde::{Deserialize, Serialize};

use super::defaults;

/// Sentiment scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// When false every endorsement is scored neutral without calling the classifier.
    pub enabled: bool,
    /// Magnitudes within `[-neutral_band, neutral_band]` are labelled neutral.
    pub neutral_band: f64,
    /// Distinct texts scored per batch; cancellation is checked between batches.
    pub batch_size: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SENTIMENT_ENABLED,
            neutral_band: defaults::DEFAULT_NEUTRAL_BAND,
            batch_size: defaults::DEFAULT_SENTIMENT_BATCH_SIZE,
        }
    }
}
