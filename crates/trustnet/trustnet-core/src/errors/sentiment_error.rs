/// Sentiment classifier errors. None of these abort a run; the scorer
/// downgrades to neutral and records a degradation event.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("classifier unavailable: {classifier}")]
    ClassifierUnavailable { classifier: String },

    #[error("classification failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("classifier returned magnitude {value} outside [-1, 1]")]
    InvalidMagnitude { value: f64 },
}
