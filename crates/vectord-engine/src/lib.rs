//! # vectord-engine
//!
//! The oracle execution contract and its host-side machinery:
//! - `RecordView`: read-only view of a stored record
//! - similarity primitives (dot, cosine, jaccard) over optional
//!   component sub-ranges
//! - `InvocationContext`: the capability object handed to an oracle
//! - the `Oracle` trait and the named registry
//! - builtin oracles
//! - `Invoker`: budgeted, panic-safe invocation producing response
//!   envelopes with optionally gzip-compressed JSON payloads
//!
//! Oracle bodies are synchronous and side-effect free: they see a
//! snapshot of the record collection, never the live store.

pub mod builtin;
pub mod context;
pub mod invoker;
pub mod oracle;
pub mod payload;
pub mod similarity;
pub mod view;

pub use context::InvocationContext;
pub use invoker::Invoker;
pub use oracle::{Oracle, OracleRegistry, RegistryError};
pub use payload::{decode_payload, encode_payload, PayloadError};
pub use similarity::{cosine, dot, jaccard, magnitude, Span};
pub use view::RecordView;
