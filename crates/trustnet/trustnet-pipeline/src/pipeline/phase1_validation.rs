//! Phase 1: Validation. Accept what is usable, describe what is not.

use tracing::{debug, info};

use trustnet_core::config::GraphConfig;
use trustnet_core::errors::{ValidationError, ValidationIssue};
use trustnet_core::interaction::{Interaction, InteractionId, RawInteraction};

/// Outcome of validating one input batch.
#[derive(Debug, Clone, Default)]
pub struct ValidatedBatch {
    pub input_count: usize,
    pub accepted: Vec<Interaction>,
    pub rejected: Vec<ValidationError>,
}

/// Validate raw documents. Ids are batch positions.
pub fn validate_raw(raw: &[RawInteraction], graph: &GraphConfig) -> ValidatedBatch {
    let mut batch = ValidatedBatch {
        input_count: raw.len(),
        ..ValidatedBatch::default()
    };
    for (index, document) in raw.iter().enumerate() {
        let checked = document
            .validate(index)
            .and_then(|interaction| check_hint_bound(interaction, graph.max_weight_hint));
        batch.push(index, checked);
    }
    batch.log_summary();
    batch
}

/// Re-key already validated interactions by batch position so sentiment
/// results can never collide on caller-assigned ids. Hints above the
/// configured ceiling are still rejected here.
pub fn index_typed(interactions: &[Interaction], graph: &GraphConfig) -> ValidatedBatch {
    let mut batch = ValidatedBatch {
        input_count: interactions.len(),
        ..ValidatedBatch::default()
    };
    for (index, interaction) in interactions.iter().enumerate() {
        let keyed = interaction.clone().with_id(InteractionId(index));
        batch.push(index, check_hint_bound(keyed, graph.max_weight_hint));
    }
    batch.log_summary();
    batch
}

impl ValidatedBatch {
    fn push(&mut self, index: usize, checked: Result<Interaction, ValidationError>) {
        match checked {
            Ok(interaction) => self.accepted.push(interaction),
            Err(e) => {
                debug!(index, error = %e, "interaction rejected");
                self.rejected.push(e);
            }
        }
    }

    fn log_summary(&self) {
        info!(
            accepted = self.accepted.len(),
            rejected = self.rejected.len(),
            "Phase 1: validation complete"
        );
    }
}

fn check_hint_bound(interaction: Interaction, max: f64) -> Result<Interaction, ValidationError> {
    match interaction.weight_hint() {
        Some(value) if value > max => Err(ValidationError {
            index: interaction.id().0,
            provenance: interaction.source().to_string(),
            issues: vec![ValidationIssue::WeightHintTooLarge { value, max }],
        }),
        _ => Ok(interaction),
    }
}
