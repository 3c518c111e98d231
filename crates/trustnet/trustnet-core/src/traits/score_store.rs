use crate::errors::TrustNetResult;
use crate::models::{RunReport, ScoreRecord};

/// Persistence for completed runs.
pub trait IScoreStore {
    /// Replace the published score set with `records` as one atomic unit.
    fn replace_scores(&self, records: &[ScoreRecord], report: &RunReport) -> TrustNetResult<()>;

    /// Look up a score by entity id, ignoring ASCII case.
    fn get_score(&self, id: &str) -> TrustNetResult<Option<ScoreRecord>>;
}
