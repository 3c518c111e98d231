use crate::errors::TrustNetResult;
use crate::interaction::RawInteraction;

/// Supplies the interaction snapshot a run is computed over.
pub trait IInteractionSource {
    /// Load every interaction document, in stored order.
    fn load_interactions(&self) -> TrustNetResult<Vec<RawInteraction>>;
}

impl IInteractionSource for Vec<RawInteraction> {
    fn load_interactions(&self) -> TrustNetResult<Vec<RawInteraction>> {
        Ok(self.clone())
    }
}
