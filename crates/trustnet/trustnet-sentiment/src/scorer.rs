//! Batch scoring of endorsement text with neutral degradation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use trustnet_core::cancellation::CancellationToken;
use trustnet_core::config::SentimentConfig;
use trustnet_core::constants::{COMPONENT_SENTIMENT, FALLBACK_NEUTRAL};
use trustnet_core::errors::{SentimentError, TrustNetError, TrustNetResult};
use trustnet_core::interaction::{Interaction, InteractionId};
use trustnet_core::models::{DegradationEvent, SentimentScore};
use trustnet_core::traits::ISentimentClassifier;

use crate::lexicon::LexiconClassifier;

/// Sentiment for every endorsement in a run, keyed by interaction id.
#[derive(Debug, Clone, Default)]
pub struct SentimentBatch {
    pub scores: HashMap<InteractionId, SentimentScore>,
    pub degradations: Vec<DegradationEvent>,
    /// Distinct non-blank texts sent to the classifier.
    pub distinct_texts: usize,
}

impl SentimentBatch {
    /// Score for `id`; interactions that were never scored are neutral.
    pub fn get(&self, id: InteractionId) -> SentimentScore {
        self.scores.get(&id).copied().unwrap_or_default()
    }
}

/// Wraps an injected classifier with batching, relabelling, and fallback.
pub struct SentimentScorer {
    classifier: Arc<dyn ISentimentClassifier>,
    config: SentimentConfig,
}

impl SentimentScorer {
    pub fn new(classifier: Arc<dyn ISentimentClassifier>, config: SentimentConfig) -> Self {
        Self { classifier, config }
    }

    /// Scorer backed by the shared lexicon classifier.
    pub fn with_lexicon(config: SentimentConfig) -> Self {
        Self::new(LexiconClassifier::shared(), config)
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Classify one text. Blank text and classifier failures yield neutral.
    pub fn classify(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() || !self.config.enabled {
            return SentimentScore::neutral();
        }
        match self.classify_checked(text) {
            Ok(score) => score,
            Err(e) => {
                warn!(classifier = self.classifier.name(), error = %e, "classification failed, using neutral");
                SentimentScore::neutral()
            }
        }
    }

    /// Score every endorsement in `interactions`.
    ///
    /// Each distinct text is classified once. Batches run on the rayon pool
    /// and `cancel` is checked before each batch.
    pub fn score_endorsements(
        &self,
        interactions: &[Interaction],
        cancel: &CancellationToken,
    ) -> TrustNetResult<SentimentBatch> {
        let mut batch = SentimentBatch::default();
        let mut by_text: BTreeMap<&str, Vec<InteractionId>> = BTreeMap::new();
        for interaction in interactions {
            let Some(content) = interaction.content() else {
                continue;
            };
            let text = content.trim();
            if text.is_empty() || !self.config.enabled {
                batch.scores.insert(interaction.id(), SentimentScore::neutral());
            } else {
                by_text.entry(text).or_default().push(interaction.id());
            }
        }
        batch.distinct_texts = by_text.len();
        if by_text.is_empty() {
            return Ok(batch);
        }

        if !self.classifier.is_available() {
            let affected = assign_neutral(&mut batch.scores, by_text.values());
            let failure = SentimentError::ClassifierUnavailable {
                classifier: self.classifier.name().to_string(),
            };
            batch.degradations.push(self.degrade(&failure.into(), affected));
            return Ok(batch);
        }

        let entries: Vec<(&str, Vec<InteractionId>)> = by_text.into_iter().collect();
        let mut affected = 0;
        let mut first_failure: Option<TrustNetError> = None;

        for (batch_index, chunk) in entries.chunks(self.config.batch_size).enumerate() {
            cancel.check(COMPONENT_SENTIMENT)?;
            let results: Vec<TrustNetResult<SentimentScore>> = chunk
                .par_iter()
                .map(|(text, _)| self.classify_checked(text))
                .collect();
            debug!(batch = batch_index, texts = chunk.len(), "sentiment batch scored");

            for ((_, ids), result) in chunk.iter().zip(results) {
                let score = match result {
                    Ok(score) => score,
                    Err(e) => {
                        affected += ids.len();
                        first_failure.get_or_insert(e);
                        SentimentScore::neutral()
                    }
                };
                for id in ids {
                    batch.scores.insert(*id, score);
                }
            }
        }

        if let Some(failure) = first_failure {
            batch.degradations.push(self.degrade(&failure, affected));
        }
        info!(
            classifier = self.classifier.name(),
            endorsements = batch.scores.len(),
            distinct_texts = batch.distinct_texts,
            degraded = affected,
            "endorsement sentiment scored"
        );
        Ok(batch)
    }

    /// Classify and relabel with the configured neutral band.
    fn classify_checked(&self, text: &str) -> TrustNetResult<SentimentScore> {
        let raw = self.classifier.classify(text)?;
        if !raw.magnitude.is_finite() || raw.magnitude.abs() > 1.0 {
            return Err(SentimentError::InvalidMagnitude {
                value: raw.magnitude,
            }
            .into());
        }
        Ok(SentimentScore::from_magnitude(
            raw.magnitude,
            self.config.neutral_band,
        ))
    }

    fn degrade(&self, failure: &TrustNetError, affected: usize) -> DegradationEvent {
        warn!(
            classifier = self.classifier.name(),
            error = %failure,
            affected,
            "sentiment degraded to neutral"
        );
        DegradationEvent {
            component: COMPONENT_SENTIMENT.to_string(),
            failure: failure.to_string(),
            fallback_used: FALLBACK_NEUTRAL.to_string(),
            affected,
            timestamp: Utc::now(),
        }
    }
}

fn assign_neutral<'a>(
    scores: &mut HashMap<InteractionId, SentimentScore>,
    groups: impl Iterator<Item = &'a Vec<InteractionId>>,
) -> usize {
    let mut affected = 0;
    for ids in groups {
        for id in ids {
            scores.insert(*id, SentimentScore::neutral());
            affected += 1;
        }
    }
    affected
}
