//! Run history.

use rusqlite::{params, Connection, OptionalExtension};

use trustnet_core::errors::{StorageError, TrustNetResult};
use trustnet_core::models::RunReport;

use crate::to_storage_err;

pub fn insert_run(conn: &Connection, report: &RunReport) -> TrustNetResult<()> {
    let json = serde_json::to_string(report)?;
    conn.execute(
        "INSERT INTO score_runs (
            run_id, snapshot_digest, started_at, duration_ms, input_count,
            accepted_count, rejected_count, node_count, iterations, converged, report
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            report.run_id,
            report.snapshot_digest,
            report.started_at.to_rfc3339(),
            report.duration_ms as i64,
            report.input_count as i64,
            report.accepted_count as i64,
            report.rejected_count() as i64,
            report.graph.node_count as i64,
            report.iterations as i64,
            report.converged,
            json,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Report of the most recently started run.
pub fn latest_run(conn: &Connection) -> TrustNetResult<Option<RunReport>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT report FROM score_runs ORDER BY started_at DESC, rowid DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    match json {
        None => Ok(None),
        Some(j) => serde_json::from_str::<RunReport>(&j).map(Some).map_err(|e| {
            StorageError::CorruptRecord {
                details: format!("score_runs.report: {e}"),
            }
            .into()
        }),
    }
}

pub fn count_runs(conn: &Connection) -> TrustNetResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM score_runs", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
