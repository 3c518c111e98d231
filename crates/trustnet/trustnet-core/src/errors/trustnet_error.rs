use super::{GraphError, SentimentError, StorageError, ValidationError};

/// Top-level error for the TrustNet workspace.
#[derive(Debug, thiserror::Error)]
pub enum TrustNetError {
    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("sentiment error: {0}")]
    SentimentError(#[from] SentimentError),

    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("run cancelled during {stage}")]
    Cancelled { stage: String },
}

pub type TrustNetResult<T> = Result<T, TrustNetError>;
