/// Graph construction and ranking errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("rank vector has {actual} entries, graph has {expected} nodes")]
    RankVectorMismatch { expected: usize, actual: usize },

    #[error("rank mass is not a valid distribution: total = {total}")]
    InvalidRankMass { total: f64 },
}
