//! Hybrid score: min–max scaled PageRank plus a capped sentiment boost.

use std::collections::BTreeMap;

use tracing::{debug, info};

use trustnet_core::config::ScoringConfig;
use trustnet_core::constants::{MAX_SCORE, MIN_SCORE};
use trustnet_core::errors::{GraphError, TrustNetResult};
use trustnet_core::models::{ScoreRecord, SentimentLabel};
use trustnet_graph::InfluenceResult;

use crate::aggregate::NodeActivity;

/// Rank spread below which all nodes are treated as equally influential.
const UNIFORM_RANK_EPSILON: f64 = 1e-12;

/// Rescale ranks into `[0, 100]`; equal ranks all map to `midpoint`.
pub fn normalize_ranks(ranks: &[f64], midpoint: f64) -> Vec<f64> {
    let (min, max) = ranks
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| (lo.min(r), hi.max(r)));
    let spread = max - min;
    if !(spread > UNIFORM_RANK_EPSILON) {
        return vec![midpoint; ranks.len()];
    }
    ranks
        .iter()
        .map(|r| ((r - min) / spread * MAX_SCORE).clamp(MIN_SCORE, MAX_SCORE))
        .collect()
}

pub struct HybridScorer {
    config: ScoringConfig,
    neutral_band: f64,
}

impl HybridScorer {
    pub fn new(config: ScoringConfig, neutral_band: f64) -> Self {
        Self { config, neutral_band }
    }

    /// Boost for a node. Exactly 0 when no endorsements were received.
    pub fn sentiment_boost(&self, activity: &NodeActivity) -> f64 {
        match activity.mean_magnitude() {
            None => 0.0,
            Some(mean) => (mean * self.config.boost_scale)
                .clamp(-self.config.boost_cap, self.config.boost_cap),
        }
    }

    /// One record per entity, sorted by id.
    ///
    /// `entity_ids` must be in the same order as `influence.scores`.
    pub fn score<'a>(
        &self,
        entity_ids: impl IntoIterator<Item = &'a str>,
        influence: &InfluenceResult,
        activity: &BTreeMap<String, NodeActivity>,
    ) -> TrustNetResult<Vec<ScoreRecord>> {
        let ids: Vec<&str> = entity_ids.into_iter().collect();
        if ids.len() != influence.scores.len() {
            return Err(GraphError::RankVectorMismatch {
                expected: ids.len(),
                actual: influence.scores.len(),
            }
            .into());
        }

        let scaled = normalize_ranks(&influence.scores, self.config.uniform_midpoint);
        let empty = NodeActivity::default();
        let mut records: Vec<ScoreRecord> = ids
            .iter()
            .zip(influence.scores.iter().zip(scaled))
            .map(|(id, (&base_influence, page_rank_score))| {
                let node = activity.get(*id).unwrap_or(&empty);
                let sentiment_boost = self.sentiment_boost(node);
                let unclamped = page_rank_score + sentiment_boost;
                let final_score = unclamped.clamp(MIN_SCORE, MAX_SCORE);
                let clamped = final_score != unclamped;
                if clamped {
                    debug!(entity = %id, unclamped, "final score clamped");
                }
                ScoreRecord {
                    id: (*id).to_string(),
                    final_score,
                    page_rank_score,
                    sentiment_boost,
                    base_influence,
                    collaborations_count: node.collaborations,
                    endorsements_received_count: node.endorsements_received,
                    positive_count: node.positive,
                    negative_count: node.negative,
                    sentiment_label: node
                        .mean_magnitude()
                        .map(|m| SentimentLabel::from_magnitude(m, self.neutral_band))
                        .unwrap_or(SentimentLabel::Neutral),
                    converged: influence.converged,
                    clamped,
                }
            })
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));

        info!(
            records = records.len(),
            clamped = records.iter().filter(|r| r.clamped).count(),
            "hybrid scores computed"
        );
        Ok(records)
    }
}
