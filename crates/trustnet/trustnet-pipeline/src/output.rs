//! Results of a completed run.

use serde::{Deserialize, Serialize};

use trustnet_core::errors::TrustNetResult;
use trustnet_core::models::{RunReport, ScoreRecord, ScoreView};
use trustnet_observability::PhaseTiming;

/// Per-entity records of one run, sorted by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet {
    records: Vec<ScoreRecord>,
}

impl ScoreSet {
    /// Wrap records, sorting them by id.
    pub fn new(mut records: Vec<ScoreRecord>) -> Self {
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Self { records }
    }

    /// Look up an entity ignoring ASCII case. An exact match wins over a
    /// case-folded one.
    pub fn get(&self, id: &str) -> Option<&ScoreRecord> {
        let id = id.trim();
        if let Ok(pos) = self.records.binary_search_by(|r| r.id.as_str().cmp(id)) {
            return self.records.get(pos);
        }
        self.records.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ScoreRecord> {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Nested client-facing projection of every record.
    pub fn views(&self) -> Vec<ScoreView> {
        self.records.iter().map(ScoreView::from).collect()
    }

    pub fn to_json(&self) -> TrustNetResult<String> {
        Ok(serde_json::to_string(&self.views())?)
    }
}

/// Everything a run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub scores: ScoreSet,
    pub report: RunReport,
    pub phases: Vec<PhaseTiming>,
}

impl PipelineOutput {
    pub fn converged(&self) -> bool {
        self.report.converged
    }
}
