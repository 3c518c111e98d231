//! Published trust scores.

use rusqlite::{params, Connection, OptionalExtension, Row};

use trustnet_core::errors::{StorageError, TrustNetResult};
use trustnet_core::models::{ScoreRecord, SentimentLabel};

use crate::to_storage_err;

const SELECT_COLUMNS: &str = "address, final_score, page_rank_score, sentiment_boost, base_influence,
     collaborations, endorsements_received, positive_count, negative_count,
     sentiment_label, converged, clamped";

/// Delete the current set and insert `records`. Callers wrap this in a
/// transaction so readers never see a partial set.
pub fn replace_all(conn: &Connection, records: &[ScoreRecord], run_id: &str) -> TrustNetResult<()> {
    conn.execute("DELETE FROM trust_scores", [])
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO trust_scores (
                address, final_score, page_rank_score, sentiment_boost, base_influence,
                collaborations, endorsements_received, positive_count, negative_count,
                sentiment_label, converged, clamped, run_id
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for r in records {
        stmt.execute(params![
            r.id,
            r.final_score,
            r.page_rank_score,
            r.sentiment_boost,
            r.base_influence,
            r.collaborations_count as i64,
            r.endorsements_received_count as i64,
            r.positive_count as i64,
            r.negative_count as i64,
            r.sentiment_label.as_str(),
            r.converged,
            r.clamped,
            run_id,
        ])
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// Look up by address ignoring ASCII case; an exact match is preferred.
pub fn get_score(conn: &Connection, address: &str) -> TrustNetResult<Option<ScoreRecord>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM trust_scores
         WHERE address = ?1 COLLATE NOCASE
         ORDER BY (address = ?1) DESC, address
         LIMIT 1"
    );
    let found = conn
        .query_row(&sql, [address.trim()], read_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    found.transpose()
}

/// Every published score, sorted by address.
pub fn list_scores(conn: &Connection) -> TrustNetResult<Vec<ScoreRecord>> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM trust_scores ORDER BY address");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(records)
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<TrustNetResult<ScoreRecord>> {
    let label: String = row.get(9)?;
    let sentiment_label = match parse_label(&label) {
        Ok(l) => l,
        Err(e) => return Ok(Err(e)),
    };
    Ok(Ok(ScoreRecord {
        id: row.get(0)?,
        final_score: row.get(1)?,
        page_rank_score: row.get(2)?,
        sentiment_boost: row.get(3)?,
        base_influence: row.get(4)?,
        collaborations_count: row.get::<_, i64>(5)? as usize,
        endorsements_received_count: row.get::<_, i64>(6)? as usize,
        positive_count: row.get::<_, i64>(7)? as usize,
        negative_count: row.get::<_, i64>(8)? as usize,
        sentiment_label,
        converged: row.get(10)?,
        clamped: row.get(11)?,
    }))
}

fn parse_label(label: &str) -> TrustNetResult<SentimentLabel> {
    match label {
        "positive" => Ok(SentimentLabel::Positive),
        "neutral" => Ok(SentimentLabel::Neutral),
        "negative" => Ok(SentimentLabel::Negative),
        other => Err(StorageError::CorruptRecord {
            details: format!("unknown sentiment label {other:?}"),
        }
        .into()),
    }
}
