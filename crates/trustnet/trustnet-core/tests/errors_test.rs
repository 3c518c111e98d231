use trustnet_core::errors::*;

#[test]
fn validation_error_lists_every_issue() {
    let err = ValidationError {
        index: 7,
        provenance: "Lens".into(),
        issues: vec![ValidationIssue::MissingFromId, ValidationIssue::MissingToId],
    };
    let msg = err.to_string();
    assert!(msg.contains("#7"));
    assert!(msg.contains("Lens"));
    assert!(msg.contains("missing from_id"));
    assert!(msg.contains("missing to_id"));
}

#[test]
fn sentiment_error_carries_classifier_name() {
    let err = SentimentError::ClassifierUnavailable {
        classifier: "hf-distilbert".into(),
    };
    assert!(err.to_string().contains("hf-distilbert"));
}

#[test]
fn cancelled_error_names_stage() {
    let err = TrustNetError::Cancelled {
        stage: "sentiment".into(),
    };
    assert!(err.to_string().contains("sentiment"));
}

// --- From impls ---

#[test]
fn validation_error_converts_to_trustnet_error() {
    let err: TrustNetError = ValidationError {
        index: 0,
        provenance: String::new(),
        issues: vec![ValidationIssue::MissingToId],
    }
    .into();
    assert!(matches!(err, TrustNetError::ValidationError(_)));
}

#[test]
fn graph_error_converts_to_trustnet_error() {
    let err: TrustNetError = GraphError::InvalidRankMass { total: f64::NAN }.into();
    assert!(matches!(err, TrustNetError::GraphError(_)));
}

#[test]
fn storage_error_converts_to_trustnet_error() {
    let err: TrustNetError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, TrustNetError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn sentiment_error_converts_to_trustnet_error() {
    let err: TrustNetError = SentimentError::InvalidMagnitude { value: 3.0 }.into();
    assert!(matches!(err, TrustNetError::SentimentError(_)));
}
