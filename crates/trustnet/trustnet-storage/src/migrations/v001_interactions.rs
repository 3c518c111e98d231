//! v001: interactions. Loosely-typed documents as ingested; every column
//! but the id is nullable so malformed records survive until validation.

use rusqlite::Connection;

use trustnet_core::errors::TrustNetResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TrustNetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS interactions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            from_id     TEXT,
            to_id       TEXT,
            kind        TEXT,
            source      TEXT,
            reference   TEXT,
            content     TEXT,
            weight      REAL,
            ingested_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_interactions_source ON interactions(source);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
