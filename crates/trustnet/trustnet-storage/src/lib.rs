//! # trustnet-storage
//!
//! SQLite store holding the interaction snapshot a run reads, the score set
//! the last completed run published, and the history of runs.

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::ScoreStore;

use trustnet_core::errors::{StorageError, TrustNetError};

/// Wrap a SQLite failure message as a workspace error.
pub(crate) fn to_storage_err(message: String) -> TrustNetError {
    StorageError::SqliteError { message }.into()
}
