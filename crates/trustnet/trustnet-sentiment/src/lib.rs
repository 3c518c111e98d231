//! # trustnet-sentiment
//!
//! Scores endorsement text. The built-in [`LexiconClassifier`] is loaded
//! once per process; any [`ISentimentClassifier`](trustnet_core::traits::ISentimentClassifier)
//! can be injected instead. A failing or unavailable classifier never fails
//! a run: affected endorsements are scored neutral and a degradation event
//! is recorded.

pub mod lexicon;
pub mod scorer;

pub use lexicon::LexiconClassifier;
pub use scorer::{SentimentBatch, SentimentScorer};
