//! Response envelopes for the host boundary.
//!
//! Every operation returns a `{success, message, ...}` envelope rather
//! than a transport error. Callers must check `success` before trusting
//! any payload field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::oracle::OracleInfo;
use crate::record::Record;

/// An oracle invocation request: which oracle, the reference record
/// identifier, and the caller-supplied positional arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    /// Registered oracle name.
    pub oracle: String,

    /// Identifier of the reference record.
    pub id: u64,

    /// Positional JSON arguments, oracle-specific.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl CallRequest {
    pub fn new(oracle: impl Into<String>, id: u64) -> Self {
        Self {
            oracle: oracle.into(),
            id,
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }
}

/// Result payload of a successful invocation.
///
/// When `compressed` is true the body is a gzip stream; decompressing
/// it yields the UTF-8 JSON document produced by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub compressed: bool,
    pub body: Vec<u8>,
}

/// Envelope returned by an oracle invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Payload>,
}

impl CallResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn success(data: Payload) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }
}

/// Envelope for single-record operations. On success of a read, the
/// record is set; on create, the message carries the new identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub record: Option<Record>,
}

impl RecordResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            record: None,
        }
    }

    pub fn success() -> Self {
        Self {
            success: true,
            message: String::new(),
            record: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            record: None,
        }
    }

    pub fn with_record(record: Record) -> Self {
        Self {
            success: true,
            message: String::new(),
            record: Some(record),
        }
    }
}

/// Envelope for oracle metadata operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub oracle: Option<OracleInfo>,
}

impl OracleResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            oracle: None,
        }
    }

    pub fn success() -> Self {
        Self {
            success: true,
            message: String::new(),
            oracle: None,
        }
    }

    pub fn with_oracle(oracle: OracleInfo) -> Self {
        Self {
            success: true,
            message: String::new(),
            oracle: Some(oracle),
        }
    }
}

/// One page of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListResponse {
    /// Total number of stored records.
    pub total: u64,
    /// Total number of pages at the requested page size.
    pub pages: u64,
    /// Records on the requested page, in insertion order.
    pub records: Vec<Record>,
}

/// All registered oracles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleListResponse {
    pub total: u64,
    pub oracles: Vec<OracleInfo>,
}

/// Host status snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub version: String,
    pub uptime_secs: u64,
    pub records: u64,
    pub oracles: u64,
}
