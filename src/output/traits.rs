//! Record store trait and error types

use crate::record::AuthorRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Durable storage for author records
///
/// One record per key; storing under an existing key replaces the previous
/// record entirely.
pub trait RecordStore: Send + Sync {
    /// Writes `record` under `key` and returns where it ended up
    fn store(&self, key: &str, record: &AuthorRecord) -> OutputResult<PathBuf>;
}
