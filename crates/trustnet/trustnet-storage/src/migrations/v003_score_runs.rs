//! v003: score_runs. One row per published run with its full report.

use rusqlite::Connection;

use trustnet_core::errors::TrustNetResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TrustNetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS score_runs (
            run_id          TEXT PRIMARY KEY,
            snapshot_digest TEXT NOT NULL,
            started_at      TEXT NOT NULL,
            duration_ms     INTEGER NOT NULL,
            input_count     INTEGER NOT NULL,
            accepted_count  INTEGER NOT NULL,
            rejected_count  INTEGER NOT NULL,
            node_count      INTEGER NOT NULL,
            iterations      INTEGER NOT NULL,
            converged       INTEGER NOT NULL,
            report          TEXT NOT NULL,
            published_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_score_runs_started ON score_runs(started_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
