//! Loosely-typed interaction documents as delivered by ingestion connectors.

use serde::{Deserialize, Serialize};

use super::{collect_issues, Interaction, InteractionId, InteractionKind, InteractionPayload};
use crate::errors::ValidationError;

/// Free-form details attached to an interaction document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// An interaction document before validation.
///
/// Field names follow the stored document shape (`from`, `to`, `type`).
/// Every field is optional so a malformed document still deserializes and
/// is reported as a rejected record instead of failing the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInteraction {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Content address or stream id the record was read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RawDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl RawInteraction {
    /// Validate the document at batch position `index`.
    ///
    /// All issues are collected before returning so one rejected-record
    /// descriptor explains everything wrong with the document.
    pub fn validate(&self, index: usize) -> Result<Interaction, ValidationError> {
        let from_id = self.from.as_deref().unwrap_or_default().trim();
        let to_id = self.to.as_deref().unwrap_or_default().trim();
        let source = self.source.clone().unwrap_or_default();

        let issues = collect_issues(from_id, to_id, self.weight);
        if !issues.is_empty() {
            return Err(ValidationError {
                index,
                provenance: source,
                issues,
            });
        }

        let kind = self
            .kind
            .as_deref()
            .map(InteractionKind::parse)
            .unwrap_or(InteractionKind::Other);
        let payload = match kind {
            InteractionKind::Collaboration => InteractionPayload::Collaboration,
            InteractionKind::Endorsement => InteractionPayload::Endorsement {
                content: self
                    .details
                    .as_ref()
                    .and_then(|d| d.content.clone())
                    .unwrap_or_default(),
            },
            InteractionKind::Profile => InteractionPayload::Profile,
            InteractionKind::Other => InteractionPayload::Other,
        };

        Ok(Interaction {
            id: InteractionId(index),
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            source,
            weight_hint: self.weight,
            payload,
        })
    }
}

impl From<&Interaction> for RawInteraction {
    fn from(interaction: &Interaction) -> Self {
        Self {
            from: Some(interaction.from_id.clone()),
            to: Some(interaction.to_id.clone()),
            kind: Some(interaction.kind().as_str().to_string()),
            source: Some(interaction.source.clone()),
            reference: None,
            details: interaction.content().map(|content| RawDetails {
                content: Some(content.to_string()),
            }),
            weight: interaction.weight_hint,
        }
    }
}
