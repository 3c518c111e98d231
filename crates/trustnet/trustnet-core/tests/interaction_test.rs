use trustnet_core::errors::ValidationIssue;
use trustnet_core::interaction::*;
use trustnet_core::models::{ScoreRecord, ScoreView, SentimentLabel, SentimentScore};

#[test]
fn raw_endorsement_document_validates() {
    let raw: RawInteraction = serde_json::from_str(
        r#"{
            "from": "0xabc",
            "to": "0x456",
            "type": "endorsement",
            "source": "Lens",
            "reference": "lens-mock-endorsement",
            "details": { "content": "Brilliant engineer, shipped on time." }
        }"#,
    )
    .unwrap();

    let interaction = raw.validate(4).unwrap();
    assert_eq!(interaction.id(), InteractionId(4));
    assert_eq!(interaction.kind(), InteractionKind::Endorsement);
    assert_eq!(interaction.source(), "Lens");
    assert_eq!(
        interaction.content(),
        Some("Brilliant engineer, shipped on time.")
    );
}

#[test]
fn raw_document_without_endpoints_is_rejected_not_dropped() {
    let raw: RawInteraction =
        serde_json::from_str(r#"{ "type": "collaboration", "source": "IPFS" }"#).unwrap();
    let err = raw.validate(2).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.provenance, "IPFS");
    assert_eq!(
        err.issues,
        vec![ValidationIssue::MissingFromId, ValidationIssue::MissingToId]
    );
}

#[test]
fn unknown_type_tag_maps_to_other() {
    let raw = RawInteraction {
        from: Some("a".into()),
        to: Some("b".into()),
        kind: Some("attestation".into()),
        ..Default::default()
    };
    assert_eq!(raw.validate(0).unwrap().kind(), InteractionKind::Other);
}

#[test]
fn endorsement_without_content_carries_empty_text() {
    let raw = RawInteraction {
        from: Some("a".into()),
        to: Some("b".into()),
        kind: Some("Endorsement".into()),
        ..Default::default()
    };
    assert_eq!(raw.validate(0).unwrap().content(), Some(""));
}

#[test]
fn negative_or_nan_weight_hints_are_rejected() {
    let err = Interaction::with_weight_hint(
        InteractionId(0),
        "a",
        "b",
        InteractionPayload::Collaboration,
        -1.0,
    )
    .unwrap_err();
    assert!(err.has_issue(&ValidationIssue::NegativeWeightHint { value: -1.0 }));

    let raw = RawInteraction {
        from: Some("a".into()),
        to: Some("b".into()),
        weight: Some(f64::INFINITY),
        ..Default::default()
    };
    assert!(raw.validate(0).is_err());
}

#[test]
fn raw_roundtrip_preserves_endorsement_text() {
    let original = Interaction::endorsement(0, "a", "b", "solid work")
        .unwrap()
        .from_source("Lens");
    let raw = RawInteraction::from(&original);
    let back = raw.validate(0).unwrap();
    assert_eq!(back, original);
}

#[test]
fn sentiment_labels_follow_neutral_band() {
    assert_eq!(SentimentLabel::from_magnitude(0.3, 0.05), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::from_magnitude(-0.3, 0.05), SentimentLabel::Negative);
    assert_eq!(SentimentLabel::from_magnitude(0.05, 0.05), SentimentLabel::Neutral);
    let clamped = SentimentScore::from_magnitude(4.0, 0.05);
    assert_eq!(clamped.magnitude, 1.0);
    assert_eq!(SentimentScore::from_magnitude(f64::NAN, 0.05), SentimentScore::neutral());
}

#[test]
fn score_view_nests_breakdown() {
    let record = ScoreRecord {
        id: "0xABC".into(),
        final_score: 72.5,
        page_rank_score: 60.0,
        sentiment_boost: 12.5,
        base_influence: 0.4,
        collaborations_count: 2,
        endorsements_received_count: 3,
        positive_count: 2,
        negative_count: 1,
        sentiment_label: SentimentLabel::Positive,
        converged: true,
        clamped: false,
    };
    let json = serde_json::to_value(ScoreView::from(&record)).unwrap();
    assert_eq!(json["address"], "0xABC");
    assert_eq!(json["scoreBreakdown"]["pageRankScore"], 60.0);
    assert_eq!(json["networkAnalysis"]["endorsementsReceived"], 3);
    assert_eq!(json["endorsementQuality"]["sentimentLabel"], "positive");
}
