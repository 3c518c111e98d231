use serde::{Deserialize, Serialize};

use super::defaults;
use crate::interaction::InteractionKind;

/// Per-kind base edge weights used by the graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub collaboration_weight: f64,
    pub endorsement_weight: f64,
    pub profile_weight: f64,
    pub other_weight: f64,
    /// Largest accepted `weight_hint`. Larger hints are rejected at
    /// validation so summed edge weights stay finite.
    pub max_weight_hint: f64,
}

impl GraphConfig {
    /// Base weight contributed by one interaction of `kind`.
    pub fn base_weight(&self, kind: InteractionKind) -> f64 {
        match kind {
            InteractionKind::Collaboration => self.collaboration_weight,
            InteractionKind::Endorsement => self.endorsement_weight,
            InteractionKind::Profile => self.profile_weight,
            InteractionKind::Other => self.other_weight,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            collaboration_weight: defaults::DEFAULT_COLLABORATION_WEIGHT,
            endorsement_weight: defaults::DEFAULT_ENDORSEMENT_WEIGHT,
            profile_weight: defaults::DEFAULT_PROFILE_WEIGHT,
            other_weight: defaults::DEFAULT_OTHER_WEIGHT,
            max_weight_hint: defaults::DEFAULT_MAX_WEIGHT_HINT,
        }
    }
}
