use serde::{Deserialize, Serialize};

use super::SentimentLabel;

/// Per-entity result of one scoring run. This is the record the serving
/// layer persists and later looks up by `id`.
///
/// `page_rank_score + sentiment_boost == final_score` holds exactly unless
/// `clamped` is set, in which case the breakdown is the pre-clamp value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: String,
    pub final_score: f64,
    pub page_rank_score: f64,
    pub sentiment_boost: f64,
    /// Raw PageRank probability mass.
    pub base_influence: f64,
    pub collaborations_count: usize,
    pub endorsements_received_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub sentiment_label: SentimentLabel,
    pub converged: bool,
    pub clamped: bool,
}
