//! Schema migrations, applied in order and recorded in `schema_version`.

mod v001_interactions;
mod v002_trust_scores;
mod v003_score_runs;

use rusqlite::Connection;
use tracing::info;

use trustnet_core::errors::{StorageError, TrustNetResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> TrustNetResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_interactions::migrate),
    (2, v002_trust_scores::migrate),
    (3, v003_score_runs::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

/// Current schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> TrustNetResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every pending migration, each in its own transaction.
pub fn run_migrations(conn: &mut Connection) -> TrustNetResult<u32> {
    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        migrate(&tx).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        tx.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
            .map_err(|e| to_storage_err(e.to_string()))?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        info!(version, "applied migration");
    }
    Ok(LATEST_VERSION.max(current))
}
