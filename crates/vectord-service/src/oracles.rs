//! Oracle registry handlers.

use std::sync::Arc;

use vectord_engine::OracleRegistry;
use vectord_types::{OracleListResponse, OracleResponse};

/// Handler for oracle metadata operations.
pub struct OraclesHandler {
    registry: Arc<OracleRegistry>,
}

impl OraclesHandler {
    pub fn new(registry: Arc<OracleRegistry>) -> Self {
        Self { registry }
    }

    /// Read metadata for a registered oracle.
    pub fn read(&self, name: &str) -> OracleResponse {
        match self.registry.find(name) {
            Some(oracle) => OracleResponse::with_oracle(oracle.info()),
            None => OracleResponse::failure(format!("oracle {} not found", name)),
        }
    }

    /// Unregister an oracle.
    pub fn remove(&self, name: &str) -> OracleResponse {
        match self.registry.remove(name) {
            Some(_) => OracleResponse::success(),
            None => OracleResponse::failure(format!("oracle {} not found", name)),
        }
    }

    /// Metadata for every registered oracle, in registration order.
    pub fn list(&self) -> OracleListResponse {
        let oracles = self.registry.list();
        OracleListResponse {
            total: oracles.len() as u64,
            oracles,
        }
    }
}
