//! Nested projection of a [`ScoreRecord`] in the shape clients consume.

use serde::{Deserialize, Serialize};

use super::{ScoreRecord, SentimentLabel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub page_rank_score: f64,
    pub sentiment_boost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAnalysis {
    pub collaborations: usize,
    pub endorsements_received: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementQuality {
    pub sentiment_label: SentimentLabel,
    pub positive_count: usize,
    pub negative_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    pub address: String,
    pub final_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub network_analysis: NetworkAnalysis,
    pub endorsement_quality: EndorsementQuality,
    pub converged: bool,
    pub clamped: bool,
}

impl From<&ScoreRecord> for ScoreView {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            address: record.id.clone(),
            final_score: record.final_score,
            score_breakdown: ScoreBreakdown {
                page_rank_score: record.page_rank_score,
                sentiment_boost: record.sentiment_boost,
            },
            network_analysis: NetworkAnalysis {
                collaborations: record.collaborations_count,
                endorsements_received: record.endorsements_received_count,
            },
            endorsement_quality: EndorsementQuality {
                sentiment_label: record.sentiment_label,
                positive_count: record.positive_count,
                negative_count: record.negative_count,
            },
            converged: record.converged,
            clamped: record.clamped,
        }
    }
}
