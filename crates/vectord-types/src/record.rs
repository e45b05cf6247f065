//! Record type for vector storage.
//!
//! Records are the fundamental unit of storage: an identifier, an
//! ordered sequence of float components and optional string metadata.
//! They are immutable from an oracle's point of view; mutation goes
//! through the store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier value of a record that has not been stored yet.
///
/// The store assigns real identifiers starting at 1.
pub const UNASSIGNED_ID: u64 = 0;

/// A stored vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned by the store on creation.
    #[serde(default)]
    pub id: u64,

    /// Vector components.
    pub data: Vec<f32>,

    /// Additional metadata (labels, provenance, etc.).
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

impl Record {
    /// Create an unstored record from its components.
    pub fn new(data: Vec<f32>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            data,
            meta: HashMap::new(),
        }
    }

    /// Attach metadata to the record.
    pub fn with_meta(mut self, meta: HashMap<String, String>) -> Self {
        self.meta = meta;
        self
    }

    /// Number of components in the vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Serialize to JSON bytes for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
