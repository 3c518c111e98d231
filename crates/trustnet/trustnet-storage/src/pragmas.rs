//! PRAGMA configuration applied to every connection.

use rusqlite::Connection;

use trustnet_core::errors::TrustNetResult;

use crate::to_storage_err;

/// WAL journaling for file-backed databases, foreign keys on, 5s busy timeout.
pub fn apply_pragmas(conn: &Connection) -> TrustNetResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Whether the connection is journaling in WAL mode.
pub fn verify_wal_mode(conn: &Connection) -> TrustNetResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
