//! Phase 2: Sentiment. Score endorsement text, degrading to neutral.

use trustnet_core::cancellation::CancellationToken;
use trustnet_core::errors::TrustNetResult;
use trustnet_core::interaction::Interaction;
use trustnet_observability::sentiment_span;
use trustnet_sentiment::{SentimentBatch, SentimentScorer};

pub fn score(
    interactions: &[Interaction],
    scorer: &SentimentScorer,
    cancel: &CancellationToken,
) -> TrustNetResult<SentimentBatch> {
    let span = sentiment_span!(scorer.classifier_name(), interactions.len());
    let _guard = span.enter();
    scorer.score_endorsements(interactions, cancel)
}
