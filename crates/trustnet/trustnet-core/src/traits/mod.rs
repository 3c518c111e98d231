mod interaction_source;
mod score_store;
mod sentiment_classifier;

pub use interaction_source::IInteractionSource;
pub use score_store::IScoreStore;
pub use sentiment_classifier::ISentimentClassifier;
