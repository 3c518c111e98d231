mod graph_error;
mod sentiment_error;
mod storage_error;
mod trustnet_error;
mod validation_error;

pub use graph_error::GraphError;
pub use sentiment_error::SentimentError;
pub use storage_error::StorageError;
pub use trustnet_error::{TrustNetError, TrustNetResult};
pub use validation_error::{ValidationError, ValidationIssue};
