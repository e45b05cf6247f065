//! Host wiring.
//!
//! A `Host` bundles the store, the oracle registry and the invoker
//! behind the boundary handlers, and answers status queries.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::oracles::OraclesHandler;
use crate::records::RecordsHandler;
use crate::runner::RunnerHandler;
use vectord_engine::{Invoker, OracleRegistry};
use vectord_store::{RecordStore, StoreError};
use vectord_types::{ServerInfo, Settings};

/// A fully wired vectord host.
pub struct Host {
    store: Arc<RecordStore>,
    registry: Arc<OracleRegistry>,
    records: RecordsHandler,
    oracles: OraclesHandler,
    runner: RunnerHandler,
    started: DateTime<Utc>,
}

impl Host {
    /// Open a host backed by the data directory in `settings`, with
    /// the builtin oracles registered.
    pub fn open(settings: &Settings) -> Result<Self, StoreError> {
        let store = Arc::new(RecordStore::open(&settings.data_dir())?);
        info!(
            "opened store at {:?} with {} records",
            settings.data_dir(),
            store.len()
        );
        Ok(Self::with_store(store, settings))
    }

    /// Build a host with no backing files.
    pub fn in_memory(settings: &Settings) -> Self {
        Self::with_store(Arc::new(RecordStore::in_memory()), settings)
    }

    fn with_store(store: Arc<RecordStore>, settings: &Settings) -> Self {
        let registry = Arc::new(OracleRegistry::with_builtins());
        let invoker = Arc::new(Invoker::new(
            store.clone(),
            registry.clone(),
            settings.invocation.clone(),
            settings.compression.clone(),
        ));

        Self {
            records: RecordsHandler::new(store.clone()),
            oracles: OraclesHandler::new(registry.clone()),
            runner: RunnerHandler::new(invoker),
            store,
            registry,
            started: Utc::now(),
        }
    }

    /// Record operation handlers.
    pub fn records(&self) -> &RecordsHandler {
        &self.records
    }

    /// Oracle metadata handlers.
    pub fn oracles(&self) -> &OraclesHandler {
        &self.oracles
    }

    /// Invocation handler.
    pub fn runner(&self) -> &RunnerHandler {
        &self.runner
    }

    /// Host status snapshot.
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: (Utc::now() - self.started).num_seconds().max(0) as u64,
            records: self.store.len() as u64,
            oracles: self.registry.len() as u64,
        }
    }
}
