//! TrustPipeline: owns configuration and the injected classifier, and runs
//! isolated scoring passes.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use trustnet_core::cancellation::CancellationToken;
use trustnet_core::config::TrustNetConfig;
use trustnet_core::errors::{TrustNetError, TrustNetResult};
use trustnet_core::interaction::{snapshot_digest, Interaction, RawInteraction};
use trustnet_core::models::RunReport;
use trustnet_core::traits::{IInteractionSource, IScoreStore, ISentimentClassifier};
use trustnet_observability::tracing_setup::events;
use trustnet_observability::{run_span, RunMetrics};
use trustnet_sentiment::{LexiconClassifier, SentimentScorer};

use crate::output::{PipelineOutput, ScoreSet};
use crate::pipeline::phase1_validation::{self, ValidatedBatch};
use crate::pipeline::run_pipeline;

/// The scoring pipeline.
///
/// Runs take `&self` and keep all per-run state on the stack, so one
/// pipeline can serve concurrent runs. Nothing carries over between runs;
/// callers that want a degradation history feed each `RunReport` into a
/// `DegradationTracker` they own.
pub struct TrustPipeline {
    config: TrustNetConfig,
    classifier: Arc<dyn ISentimentClassifier>,
}

impl TrustPipeline {
    /// Pipeline with the built-in lexicon classifier.
    pub fn new(config: TrustNetConfig) -> TrustNetResult<Self> {
        Self::with_classifier(config, LexiconClassifier::shared())
    }

    pub fn with_classifier(
        config: TrustNetConfig,
        classifier: Arc<dyn ISentimentClassifier>,
    ) -> TrustNetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classifier,
        })
    }

    pub fn config(&self) -> &TrustNetConfig {
        &self.config
    }

    /// Score validated interactions. Each interaction is re-keyed by its
    /// position in `interactions`.
    pub fn run(&self, interactions: &[Interaction]) -> TrustNetResult<PipelineOutput> {
        self.run_with_cancel(interactions, &CancellationToken::new())
    }

    pub fn run_with_cancel(
        &self,
        interactions: &[Interaction],
        cancel: &CancellationToken,
    ) -> TrustNetResult<PipelineOutput> {
        let mut metrics = RunMetrics::start();
        metrics.enter("validation");
        let batch = phase1_validation::index_typed(interactions, &self.config.graph);
        self.execute(batch, metrics, cancel)
    }

    /// Validate and score raw documents. Invalid documents are reported in
    /// the run report; the rest are scored.
    pub fn run_raw(
        &self,
        raw: &[RawInteraction],
        cancel: &CancellationToken,
    ) -> TrustNetResult<PipelineOutput> {
        let mut metrics = RunMetrics::start();
        metrics.enter("validation");
        let batch = phase1_validation::validate_raw(raw, &self.config.graph);
        self.execute(batch, metrics, cancel)
    }

    pub fn run_from_source(
        &self,
        source: &dyn IInteractionSource,
        cancel: &CancellationToken,
    ) -> TrustNetResult<PipelineOutput> {
        let raw = source.load_interactions()?;
        self.run_raw(&raw, cancel)
    }

    /// Load, score, and publish. The store is only written when the run
    /// completes; a cancelled or failed run leaves it untouched.
    pub fn run_and_persist(
        &self,
        source: &dyn IInteractionSource,
        store: &dyn IScoreStore,
        cancel: &CancellationToken,
    ) -> TrustNetResult<PipelineOutput> {
        let output = self.run_from_source(source, cancel)?;
        cancel.check("persistence")?;
        store.replace_scores(output.scores.records(), &output.report)?;
        info!(
            run_id = %output.report.run_id,
            records = output.scores.len(),
            "scores published"
        );
        Ok(output)
    }

    fn execute(
        &self,
        batch: ValidatedBatch,
        mut metrics: RunMetrics,
        cancel: &CancellationToken,
    ) -> TrustNetResult<PipelineOutput> {
        let run_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        let span = run_span!(run_id, batch.input_count);
        let _guard = span.enter();

        events::run_started(&run_id, batch.input_count);
        if !batch.rejected.is_empty() {
            events::records_rejected(&run_id, batch.rejected.len(), batch.accepted.len());
        }

        let scorer = SentimentScorer::new(Arc::clone(&self.classifier), self.config.sentiment.clone());
        let scored = match run_pipeline(&batch.accepted, &self.config, &scorer, &mut metrics, cancel) {
            Ok(scored) => scored,
            Err(e) => {
                if let TrustNetError::Cancelled { stage } = &e {
                    events::run_cancelled(&run_id, stage);
                }
                return Err(e);
            }
        };

        for event in &scored.degradations {
            events::degradation_triggered(
                &event.component,
                &event.failure,
                &event.fallback_used,
                event.affected,
            );
        }

        let phases = metrics.finish().to_vec();
        let duration_ms = metrics.elapsed_ms();
        let report = RunReport {
            run_id: run_id.clone(),
            snapshot_digest: snapshot_digest(&batch.accepted),
            started_at,
            duration_ms,
            input_count: batch.input_count,
            accepted_count: batch.accepted.len(),
            rejected: batch.rejected,
            graph: scored.graph,
            iterations: scored.iterations,
            converged: scored.converged,
            residual: scored.residual,
            degradations: scored.degradations,
        };
        events::run_completed(&run_id, scored.records.len(), report.converged, duration_ms);

        Ok(PipelineOutput {
            scores: ScoreSet::new(scored.records),
            report,
            phases,
        })
    }
}
