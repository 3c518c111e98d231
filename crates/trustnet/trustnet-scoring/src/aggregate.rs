//! Per-entity interaction counts and received-endorsement sentiment.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use trustnet_core::interaction::{Interaction, InteractionId, InteractionKind};
use trustnet_core::models::{SentimentLabel, SentimentScore};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeActivity {
    /// Collaborations the entity took part in, on either side.
    pub collaborations: usize,
    pub endorsements_received: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub magnitude_sum: f64,
}

impl NodeActivity {
    /// Mean magnitude of received endorsements; `None` when there were none.
    pub fn mean_magnitude(&self) -> Option<f64> {
        if self.endorsements_received == 0 {
            return None;
        }
        Some(self.magnitude_sum / self.endorsements_received as f64)
    }

    fn receive(&mut self, score: SentimentScore) {
        self.endorsements_received += 1;
        self.magnitude_sum += score.magnitude;
        match score.label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }
}

/// Activity per entity. Self-endorsements are not counted as received.
///
/// Magnitudes are summed in ascending order so the mean does not depend on
/// input order.
pub fn aggregate_activity(
    interactions: &[Interaction],
    sentiment: &HashMap<InteractionId, SentimentScore>,
) -> BTreeMap<String, NodeActivity> {
    let mut activity: BTreeMap<String, NodeActivity> = BTreeMap::new();
    let mut received: BTreeMap<&str, Vec<SentimentScore>> = BTreeMap::new();

    for interaction in interactions {
        activity.entry(interaction.from_id().to_string()).or_default();
        activity.entry(interaction.to_id().to_string()).or_default();
        match interaction.kind() {
            InteractionKind::Collaboration => {
                bump_collaboration(&mut activity, interaction.from_id());
                if !interaction.is_self_loop() {
                    bump_collaboration(&mut activity, interaction.to_id());
                }
            }
            InteractionKind::Endorsement if !interaction.is_self_loop() => {
                let score = sentiment.get(&interaction.id()).copied().unwrap_or_default();
                received.entry(interaction.to_id()).or_default().push(score);
            }
            _ => {}
        }
    }

    for (entity, mut scores) in received {
        scores.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
        if let Some(node) = activity.get_mut(entity) {
            for score in scores {
                node.receive(score);
            }
        }
    }
    activity
}

fn bump_collaboration(activity: &mut BTreeMap<String, NodeActivity>, entity: &str) {
    if let Some(node) = activity.get_mut(entity) {
        node.collaborations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_collaborations_on_both_sides() {
        let interactions = vec![
            Interaction::collaboration(0, "a", "b").unwrap(),
            Interaction::collaboration(1, "a", "a").unwrap(),
        ];
        let activity = aggregate_activity(&interactions, &HashMap::new());
        assert_eq!(activity["a"].collaborations, 2);
        assert_eq!(activity["b"].collaborations, 1);
    }

    #[test]
    fn endorsements_aggregate_on_receiver() {
        let interactions = vec![
            Interaction::endorsement(0, "a", "b", "great").unwrap(),
            Interaction::endorsement(1, "c", "b", "bad").unwrap(),
            Interaction::endorsement(2, "b", "b", "i am great").unwrap(),
        ];
        let mut sentiment = HashMap::new();
        sentiment.insert(InteractionId(0), SentimentScore::from_magnitude(0.8, 0.05));
        sentiment.insert(InteractionId(1), SentimentScore::from_magnitude(-0.4, 0.05));
        sentiment.insert(InteractionId(2), SentimentScore::from_magnitude(1.0, 0.05));

        let activity = aggregate_activity(&interactions, &sentiment);
        let b = &activity["b"];
        assert_eq!(b.endorsements_received, 2);
        assert_eq!((b.positive, b.negative), (1, 1));
        assert!((b.mean_magnitude().unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(activity["a"].mean_magnitude(), None);
    }
}
