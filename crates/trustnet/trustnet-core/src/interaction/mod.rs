//! Validated interaction records.
//!
//! An [`Interaction`] can only be obtained through a constructor that checks
//! the required fields, so downstream stages never see a record with a blank
//! endpoint or an unusable weight hint.

mod kind;
mod raw;

pub use kind::InteractionKind;
pub use raw::{RawDetails, RawInteraction};

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationIssue};

/// Stable identifier of an interaction within one run: its batch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InteractionId(pub usize);

/// Kind-specific payload. Only endorsements carry text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InteractionPayload {
    Collaboration,
    Endorsement { content: String },
    Profile,
    Other,
}

impl InteractionPayload {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Collaboration => InteractionKind::Collaboration,
            Self::Endorsement { .. } => InteractionKind::Endorsement,
            Self::Profile => InteractionKind::Profile,
            Self::Other => InteractionKind::Other,
        }
    }
}

/// An observed relationship event between two entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    id: InteractionId,
    from_id: String,
    to_id: String,
    source: String,
    weight_hint: Option<f64>,
    payload: InteractionPayload,
}

impl Interaction {
    /// Build a validated interaction. Entity ids are trimmed.
    pub fn new(
        id: InteractionId,
        from_id: &str,
        to_id: &str,
        payload: InteractionPayload,
    ) -> Result<Self, ValidationError> {
        Self::build(id, from_id, to_id, payload, None)
    }

    /// Build a validated interaction with an explicit weight override.
    pub fn with_weight_hint(
        id: InteractionId,
        from_id: &str,
        to_id: &str,
        payload: InteractionPayload,
        weight_hint: f64,
    ) -> Result<Self, ValidationError> {
        Self::build(id, from_id, to_id, payload, Some(weight_hint))
    }

    pub fn collaboration(id: usize, from_id: &str, to_id: &str) -> Result<Self, ValidationError> {
        Self::new(InteractionId(id), from_id, to_id, InteractionPayload::Collaboration)
    }

    pub fn endorsement(
        id: usize,
        from_id: &str,
        to_id: &str,
        content: &str,
    ) -> Result<Self, ValidationError> {
        Self::new(
            InteractionId(id),
            from_id,
            to_id,
            InteractionPayload::Endorsement {
                content: content.to_string(),
            },
        )
    }

    /// An identity/profile attestation: a self-loop on `entity_id`.
    pub fn profile(id: usize, entity_id: &str) -> Result<Self, ValidationError> {
        Self::new(InteractionId(id), entity_id, entity_id, InteractionPayload::Profile)
    }

    /// Attach a provenance tag.
    pub fn from_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Re-key the interaction, e.g. to its position in a new batch.
    pub fn with_id(mut self, id: InteractionId) -> Self {
        self.id = id;
        self
    }

    fn build(
        id: InteractionId,
        from_id: &str,
        to_id: &str,
        payload: InteractionPayload,
        weight_hint: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let from_id = from_id.trim();
        let to_id = to_id.trim();
        let issues = collect_issues(from_id, to_id, weight_hint);
        if !issues.is_empty() {
            return Err(ValidationError {
                index: id.0,
                provenance: String::new(),
                issues,
            });
        }
        Ok(Self {
            id,
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            source: String::new(),
            weight_hint,
            payload,
        })
    }

    pub fn id(&self) -> InteractionId {
        self.id
    }

    pub fn from_id(&self) -> &str {
        &self.from_id
    }

    pub fn to_id(&self) -> &str {
        &self.to_id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn weight_hint(&self) -> Option<f64> {
        self.weight_hint
    }

    pub fn payload(&self) -> &InteractionPayload {
        &self.payload
    }

    pub fn kind(&self) -> InteractionKind {
        self.payload.kind()
    }

    /// Endorsement text, if this is an endorsement.
    pub fn content(&self) -> Option<&str> {
        match &self.payload {
            InteractionPayload::Endorsement { content } => Some(content),
            _ => None,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_id == self.to_id
    }

    /// Canonical byte form used for snapshot digests. Excludes the batch id
    /// so the digest does not depend on record order.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let hint = self
            .weight_hint
            .map(|w| w.to_bits().to_string())
            .unwrap_or_default();
        format!(
            "{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
            self.from_id,
            self.to_id,
            self.kind(),
            self.source,
            hint,
            self.content().unwrap_or_default()
        )
        .into_bytes()
    }
}

/// Field checks shared by every construction path.
fn collect_issues(from_id: &str, to_id: &str, weight_hint: Option<f64>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if from_id.is_empty() {
        issues.push(ValidationIssue::MissingFromId);
    }
    if to_id.is_empty() {
        issues.push(ValidationIssue::MissingToId);
    }
    if let Some(value) = weight_hint {
        if !value.is_finite() {
            issues.push(ValidationIssue::NonFiniteWeightHint { value });
        } else if value < 0.0 {
            issues.push(ValidationIssue::NegativeWeightHint { value });
        }
    }
    issues
}

/// Order-independent blake3 digest of a validated interaction set.
pub fn snapshot_digest(interactions: &[Interaction]) -> String {
    let mut leaves: Vec<blake3::Hash> = interactions
        .iter()
        .map(|i| blake3::hash(&i.canonical_bytes()))
        .collect();
    leaves.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));

    let mut hasher = blake3::Hasher::new();
    for leaf in &leaves {
        hasher.update(leaf.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected_with_every_issue() {
        let err = Interaction::new(InteractionId(3), "  ", "", InteractionPayload::Other).unwrap_err();
        assert_eq!(err.index, 3);
        assert!(err.has_issue(&ValidationIssue::MissingFromId));
        assert!(err.has_issue(&ValidationIssue::MissingToId));
    }

    #[test]
    fn ids_are_trimmed() {
        let i = Interaction::collaboration(0, " 0xabc ", "DAO1").unwrap();
        assert_eq!(i.from_id(), "0xabc");
        assert!(!i.is_self_loop());
    }

    #[test]
    fn digest_ignores_record_order() {
        let a = Interaction::collaboration(0, "a", "b").unwrap();
        let b = Interaction::endorsement(1, "b", "a", "great").unwrap();
        let a2 = Interaction::collaboration(1, "a", "b").unwrap();
        let b2 = Interaction::endorsement(0, "b", "a", "great").unwrap();
        assert_eq!(snapshot_digest(&[a, b]), snapshot_digest(&[b2, a2]));
    }
}
