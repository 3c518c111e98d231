//! Read and append interaction documents.

use rusqlite::{params, Connection};

use trustnet_core::errors::TrustNetResult;
use trustnet_core::interaction::{RawDetails, RawInteraction};

use crate::to_storage_err;

pub fn insert_interactions(conn: &Connection, docs: &[RawInteraction]) -> TrustNetResult<usize> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO interactions (from_id, to_id, kind, source, reference, content, weight)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for doc in docs {
        let content = doc.details.as_ref().and_then(|d| d.content.as_deref());
        stmt.execute(params![
            doc.from,
            doc.to,
            doc.kind,
            doc.source,
            doc.reference,
            content,
            doc.weight,
        ])
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(docs.len())
}

/// Every stored document in insertion order.
pub fn load_interactions(conn: &Connection) -> TrustNetResult<Vec<RawInteraction>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT from_id, to_id, kind, source, reference, content, weight
             FROM interactions ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let content: Option<String> = row.get(5)?;
            Ok(RawInteraction {
                from: row.get(0)?,
                to: row.get(1)?,
                kind: row.get(2)?,
                source: row.get(3)?,
                reference: row.get(4)?,
                details: content.map(|c| RawDetails { content: Some(c) }),
                weight: row.get(6)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_interactions(conn: &Connection) -> TrustNetResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM interactions", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn clear_interactions(conn: &Connection) -> TrustNetResult<usize> {
    conn.execute("DELETE FROM interactions", [])
        .map_err(|e| to_storage_err(e.to_string()))
}
