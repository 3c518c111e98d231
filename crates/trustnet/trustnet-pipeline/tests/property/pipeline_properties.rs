//! Property tests for the full scoring pipeline.

use proptest::prelude::*;

use trustnet_core::constants::RANK_MASS_TOLERANCE;
use trustnet_core::interaction::Interaction;
use trustnet_core::TrustNetConfig;
use trustnet_pipeline::TrustPipeline;

const TEXTS: &[&str] = &[
    "",
    "great collaborator",
    "terrible, avoid",
    "not reliable",
    "shipped the release",
    "very helpful and honest",
];

/// (from, to, kind selector, text selector)
fn records_strategy() -> impl Strategy<Value = Vec<(u8, u8, u8, usize)>> {
    prop::collection::vec((0u8..10, 0u8..10, 0u8..4, 0..TEXTS.len()), 0..40)
}

fn materialize(records: &[(u8, u8, u8, usize)]) -> Vec<Interaction> {
    records
        .iter()
        .enumerate()
        .map(|(i, &(from, to, kind, text))| {
            let (from, to) = (format!("0x{from:02}"), format!("0x{to:02}"));
            match kind {
                0 => Interaction::collaboration(i, &from, &to),
                1 | 2 => Interaction::endorsement(i, &from, &to, TEXTS[text]),
                _ => Interaction::profile(i, &from),
            }
            .unwrap()
        })
        .collect()
}

fn pipeline() -> TrustPipeline {
    TrustPipeline::new(TrustNetConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scores_are_bounded_and_mass_is_one(records in records_strategy()) {
        let output = pipeline().run(&materialize(&records)).unwrap();
        if !output.scores.is_empty() {
            let mass: f64 = output.scores.iter().map(|r| r.base_influence).sum();
            prop_assert!((mass - 1.0).abs() < RANK_MASS_TOLERANCE);
        }
        for r in output.scores.iter() {
            prop_assert!((0.0..=100.0).contains(&r.final_score));
            if r.endorsements_received_count == 0 {
                prop_assert_eq!(r.sentiment_boost, 0.0);
            }
        }
    }

    #[test]
    fn record_order_does_not_matter(records in records_strategy()) {
        let forward = materialize(&records);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        if !rotated.is_empty() {
            let mid = rotated.len() / 2;
            rotated.rotate_left(mid);
        }

        let a = pipeline().run(&forward).unwrap();
        let b = pipeline().run(&reversed).unwrap();
        let c = pipeline().run(&rotated).unwrap();
        prop_assert_eq!(&a.scores, &b.scores);
        prop_assert_eq!(&a.scores, &c.scores);
        prop_assert_eq!(&a.report.snapshot_digest, &b.report.snapshot_digest);
    }

    #[test]
    fn source_only_node_keeps_mass(records in records_strategy()) {
        let mut interactions = materialize(&records);
        // An entity that only ever points outward.
        interactions.push(Interaction::collaboration(interactions.len(), "0xsource", "0x00").unwrap());
        let output = pipeline().run(&interactions).unwrap();
        let mass: f64 = output.scores.iter().map(|r| r.base_influence).sum();
        prop_assert!(mass >= 1.0 - RANK_MASS_TOLERANCE);
        prop_assert!(output.scores.get("0xsource").is_some());
    }
}
