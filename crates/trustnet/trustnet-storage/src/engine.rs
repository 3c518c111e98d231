//! ScoreStore: the SQLite-backed interaction source and score store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::info;

use trustnet_core::errors::TrustNetResult;
use trustnet_core::interaction::RawInteraction;
use trustnet_core::models::{RunReport, ScoreRecord};
use trustnet_core::traits::{IInteractionSource, IScoreStore};

use crate::queries::{interaction_ops, run_ops, score_ops};
use crate::{migrations, pragmas, to_storage_err};

/// Single-connection SQLite store. Writers serialize on the mutex.
pub struct ScoreStore {
    conn: Mutex<Connection>,
}

impl ScoreStore {
    /// Open (or create) a file-backed store and bring its schema up to date.
    pub fn open(path: impl AsRef<Path>) -> TrustNetResult<Self> {
        let conn = Connection::open(path.as_ref()).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Self::init(conn)
    }

    /// In-memory store for tests and one-shot runs.
    pub fn open_in_memory() -> TrustNetResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| to_storage_err(e.to_string()))?;
        Self::init(conn)
    }

    fn init(mut conn: Connection) -> TrustNetResult<Self> {
        let version = migrations::run_migrations(&mut conn)?;
        info!(schema_version = version, "score store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> TrustNetResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned".to_string()))
    }

    /// Append interaction documents to the snapshot.
    pub fn insert_interactions(&self, docs: &[RawInteraction]) -> TrustNetResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        let inserted = interaction_ops::insert_interactions(&tx, docs)?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(inserted)
    }

    pub fn interaction_count(&self) -> TrustNetResult<usize> {
        interaction_ops::count_interactions(&*self.lock()?)
    }

    /// Drop the interaction snapshot. Published scores are unaffected.
    pub fn clear_interactions(&self) -> TrustNetResult<usize> {
        interaction_ops::clear_interactions(&*self.lock()?)
    }

    /// The published score set, sorted by address.
    pub fn list_scores(&self) -> TrustNetResult<Vec<ScoreRecord>> {
        score_ops::list_scores(&*self.lock()?)
    }

    pub fn latest_run(&self) -> TrustNetResult<Option<RunReport>> {
        run_ops::latest_run(&*self.lock()?)
    }

    pub fn run_count(&self) -> TrustNetResult<usize> {
        run_ops::count_runs(&*self.lock()?)
    }

    /// Whether the database is journaling in WAL mode (never for in-memory stores).
    pub fn is_wal(&self) -> TrustNetResult<bool> {
        pragmas::verify_wal_mode(&*self.lock()?)
    }

    pub fn schema_version(&self) -> TrustNetResult<u32> {
        migrations::current_version(&*self.lock()?)
    }
}

impl IInteractionSource for ScoreStore {
    fn load_interactions(&self) -> TrustNetResult<Vec<RawInteraction>> {
        interaction_ops::load_interactions(&*self.lock()?)
    }
}

impl IScoreStore for ScoreStore {
    fn replace_scores(&self, records: &[ScoreRecord], report: &RunReport) -> TrustNetResult<()> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        score_ops::replace_all(&tx, records, &report.run_id)?;
        run_ops::insert_run(&tx, report)?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        info!(run_id = %report.run_id, records = records.len(), "score set replaced");
        Ok(())
    }

    fn get_score(&self, id: &str) -> TrustNetResult<Option<ScoreRecord>> {
        score_ops::get_score(&*self.lock()?, id)
    }
}
