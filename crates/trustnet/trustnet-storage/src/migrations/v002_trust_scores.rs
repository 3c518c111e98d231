//! v002: trust_scores. The published score set, replaced per run.

use rusqlite::Connection;

use trustnet_core::errors::TrustNetResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TrustNetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS trust_scores (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            address                 TEXT NOT NULL UNIQUE,
            final_score             REAL NOT NULL,
            page_rank_score         REAL NOT NULL,
            sentiment_boost         REAL NOT NULL,
            base_influence          REAL NOT NULL,
            collaborations          INTEGER NOT NULL DEFAULT 0,
            endorsements_received   INTEGER NOT NULL DEFAULT 0,
            positive_count          INTEGER NOT NULL DEFAULT 0,
            negative_count          INTEGER NOT NULL DEFAULT 0,
            sentiment_label         TEXT NOT NULL,
            converged               INTEGER NOT NULL,
            clamped                 INTEGER NOT NULL,
            run_id                  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trust_scores_address_nocase
            ON trust_scores(address COLLATE NOCASE);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
