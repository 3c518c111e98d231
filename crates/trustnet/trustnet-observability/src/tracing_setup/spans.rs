//! Span definitions per pipeline stage.

/// Create a span for a whole scoring run.
#[macro_export]
macro_rules! run_span {
    ($run_id:expr, $input_count:expr) => {
        tracing::info_span!("trustnet.run", run_id = %$run_id, input_count = $input_count)
    };
}

/// Create a sentiment scoring span.
#[macro_export]
macro_rules! sentiment_span {
    ($classifier:expr, $text_count:expr) => {
        tracing::info_span!("trustnet.sentiment", classifier = %$classifier, text_count = $text_count)
    };
}

/// Create a graph construction span.
#[macro_export]
macro_rules! graph_span {
    ($interaction_count:expr) => {
        tracing::info_span!("trustnet.graph", interaction_count = $interaction_count)
    };
}

/// Create a PageRank span.
#[macro_export]
macro_rules! ranking_span {
    ($node_count:expr, $damping:expr) => {
        tracing::info_span!("trustnet.ranking", node_count = $node_count, damping = $damping)
    };
}

/// Create a hybrid scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($node_count:expr) => {
        tracing::info_span!("trustnet.scoring", node_count = $node_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RUN: &str = "trustnet.run";
    pub const SENTIMENT: &str = "trustnet.sentiment";
    pub const GRAPH: &str = "trustnet.graph";
    pub const RANKING: &str = "trustnet.ranking";
    pub const SCORING: &str = "trustnet.scoring";
}
