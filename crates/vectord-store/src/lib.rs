//! # vectord-store
//!
//! The record store: an insertion-ordered, thread-safe collection of
//! vector records with store-assigned identifiers.
//!
//! Two modes:
//! - persistent: one JSON file per record under `<data_dir>/records`,
//!   loaded on open
//! - in-memory: no filesystem, for embedding and tests

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
