use serde::{Deserialize, Serialize};

/// A single reason an interaction record was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("missing from_id")]
    MissingFromId,

    #[error("missing to_id")]
    MissingToId,

    #[error("weight hint is not finite: {value}")]
    NonFiniteWeightHint { value: f64 },

    #[error("weight hint is negative: {value}")]
    NegativeWeightHint { value: f64 },

    #[error("weight hint {value} exceeds the maximum of {max}")]
    WeightHintTooLarge { value: f64, max: f64 },
}

/// Rejected-record descriptor: every issue found on one input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("interaction #{index} from {provenance:?} rejected: {}", join_issues(.issues))]
pub struct ValidationError {
    /// Position of the record in the input batch.
    pub index: usize,
    /// Provenance tag of the record, if it had one.
    pub provenance: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Whether the record was rejected for `issue`.
    pub fn has_issue(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
