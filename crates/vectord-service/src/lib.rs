//! # vectord-service
//!
//! Host-boundary handlers over the store, the oracle registry and the
//! invoker. Every operation returns a `{success, message, ...}`
//! envelope; handlers never raise for application-level failures.

pub mod host;
pub mod oracles;
pub mod records;
pub mod runner;

pub use host::Host;
pub use oracles::OraclesHandler;
pub use records::RecordsHandler;
pub use runner::RunnerHandler;
