//! Invocation error taxonomy.
//!
//! Every way an oracle invocation can fail is captured here and turned
//! into a `success=false` envelope at the host boundary. Errors never
//! cross the host/oracle boundary as panics.

use thiserror::Error;

/// Errors produced while invoking an oracle.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// No oracle registered under the requested name
    #[error("oracle {0} not found")]
    OracleNotFound(String),

    /// Reference identifier does not resolve to a stored record
    #[error("record {0} not found")]
    RecordNotFound(u64),

    /// Similarity primitive invoked over vectors of unequal length
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Sub-range exceeds the components of one of the operands
    #[error("range [{start}, {end}) out of bounds for vector of length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Caller-supplied arguments do not match what the oracle expects
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failure signalled by the oracle body itself
    #[error("{0}")]
    Failed(String),

    /// Oracle exceeded the host-imposed execution budget
    #[error("invocation exceeded budget of {budget_ms}ms")]
    Timeout { budget_ms: u64 },

    /// Result value could not be serialized to JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
