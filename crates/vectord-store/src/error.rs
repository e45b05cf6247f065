//! Store layer error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file could not be parsed
    #[error("corrupt data file {path}: {reason}")]
    CorruptFile { path: PathBuf, reason: String },

    /// Data file name does not match the identifier stored inside it
    #[error("data file {path} holds record {actual}, expected {expected}")]
    IdMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// Identifier collision on create
    #[error("record identifier {0} violates the unicity constraint")]
    DuplicateId(u64),

    /// Record not found
    #[error("record {0} not found")]
    NotFound(u64),

    /// Record serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
