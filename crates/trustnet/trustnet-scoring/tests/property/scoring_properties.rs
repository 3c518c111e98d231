//! Property tests for hybrid scoring.

use std::collections::BTreeMap;

use proptest::prelude::*;

use trustnet_core::config::ScoringConfig;
use trustnet_graph::InfluenceResult;
use trustnet_scoring::{HybridScorer, NodeActivity};

fn node_strategy() -> impl Strategy<Value = (f64, usize, f64)> {
    // (rank weight, endorsements received, mean magnitude)
    (0.001f64..1.0, 0usize..5, -1.0f64..=1.0)
}

proptest! {
    #[test]
    fn scores_stay_in_range(nodes in prop::collection::vec(node_strategy(), 1..40)) {
        let total: f64 = nodes.iter().map(|(r, _, _)| r).sum();
        let ids: Vec<String> = (0..nodes.len()).map(|i| format!("n{i:03}")).collect();
        let mut activity = BTreeMap::new();
        for (id, (_, count, mean)) in ids.iter().zip(&nodes) {
            activity.insert(id.clone(), NodeActivity {
                endorsements_received: *count,
                magnitude_sum: mean * *count as f64,
                ..NodeActivity::default()
            });
        }
        let influence = InfluenceResult {
            scores: nodes.iter().map(|(r, _, _)| r / total).collect(),
            iterations: 1,
            converged: true,
            residual: 0.0,
            raw_mass: 1.0,
        };

        let scorer = HybridScorer::new(ScoringConfig::default(), 0.05);
        let records = scorer
            .score(ids.iter().map(String::as_str), &influence, &activity)
            .unwrap();

        for (record, (_, count, _)) in records.iter().zip(&nodes) {
            prop_assert!((0.0..=100.0).contains(&record.final_score));
            prop_assert!((0.0..=100.0).contains(&record.page_rank_score));
            prop_assert!(record.sentiment_boost.abs() <= 15.0);
            if *count == 0 {
                prop_assert_eq!(record.sentiment_boost, 0.0);
            }
            if !record.clamped {
                prop_assert_eq!(record.final_score, record.page_rank_score + record.sentiment_boost);
            }
        }
    }
}
