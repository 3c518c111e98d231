use crate::errors::TrustNetResult;
use crate::models::SentimentScore;

/// Text polarity classifier injected into the pipeline.
///
/// Implementations must be deterministic: the same text always yields the
/// same score.
pub trait ISentimentClassifier: Send + Sync {
    /// Classify a single piece of text.
    fn classify(&self, text: &str) -> TrustNetResult<SentimentScore>;

    /// Human-readable classifier name.
    fn name(&self) -> &str;

    /// Whether this classifier can currently serve requests.
    fn is_available(&self) -> bool;
}
