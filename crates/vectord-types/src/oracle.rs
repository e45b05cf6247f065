//! Oracle metadata.

use serde::{Deserialize, Serialize};

/// Metadata describing a registered oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleInfo {
    /// Registered name, used to address the oracle in a call.
    pub name: String,

    /// Implementation version.
    pub version: u32,

    /// Human-readable description of what the oracle computes.
    pub description: String,
}
