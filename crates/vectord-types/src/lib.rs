//! # vectord-types
//!
//! Shared domain types for vectord:
//! - Records: stored vectors with an identifier and string metadata
//! - Envelopes: the `{success, message, data}` response shapes of the
//!   host boundary, including the compressed call payload
//! - Errors: the invocation error taxonomy
//! - Settings: layered configuration

pub mod config;
pub mod envelope;
pub mod error;
pub mod oracle;
pub mod record;

pub use config::{CompressionSettings, ConfigError, InvocationSettings, Settings};
pub use envelope::{
    CallRequest, CallResponse, OracleListResponse, OracleResponse, Payload, RecordListResponse,
    RecordResponse, ServerInfo,
};
pub use error::InvokeError;
pub use oracle::OracleInfo;
pub use record::{Record, UNASSIGNED_ID};
