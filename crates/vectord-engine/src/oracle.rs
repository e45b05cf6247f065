//! Oracle trait and registry.
//!
//! An oracle is a named scoring strategy over the record collection.
//! Bodies are synchronous, non-suspending and deterministic for a
//! fixed snapshot and argument list; the host may cache or retry
//! invocations on that assumption.

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::context::InvocationContext;
use vectord_types::{InvokeError, OracleInfo};

/// A named, versioned scoring function over the record collection.
pub trait Oracle: Send + Sync {
    /// Registered name, used to address the oracle in a call.
    fn name(&self) -> &str;

    /// Implementation version.
    fn version(&self) -> u32 {
        1
    }

    /// What the oracle computes.
    fn description(&self) -> &str {
        ""
    }

    /// Run the oracle against a snapshot.
    ///
    /// `id` is the reference record identifier; `args` are the
    /// caller-supplied positional arguments. The returned value must
    /// be JSON-serializable (it already is a `serde_json::Value`).
    fn invoke(
        &self,
        ctx: &InvocationContext,
        id: u64,
        args: &[Value],
    ) -> Result<Value, InvokeError>;

    /// Metadata describing this oracle.
    fn info(&self) -> OracleInfo {
        OracleInfo {
            name: self.name().to_string(),
            version: self.version(),
            description: self.description().to_string(),
        }
    }
}

/// Errors from registry management.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("oracle {0} is already registered")]
    DuplicateName(String),
}

/// Thread-safe name-to-oracle map, in registration order.
pub struct OracleRegistry {
    oracles: RwLock<IndexMap<String, Arc<dyn Oracle>>>,
}

impl OracleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            oracles: RwLock::new(IndexMap::new()),
        }
    }

    /// Create a registry with the builtin oracles registered.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry
            .register(Arc::new(crate::builtin::DotAll))
            .expect("builtin names are unique");
        registry
            .register(Arc::new(crate::builtin::FindSimilar))
            .expect("builtin names are unique");
        registry
    }

    /// Register an oracle under its name. Names must be unique.
    pub fn register(&self, oracle: Arc<dyn Oracle>) -> Result<(), RegistryError> {
        let mut oracles = self.oracles.write().unwrap();
        let name = oracle.name().to_string();
        if oracles.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        oracles.insert(name, oracle);
        Ok(())
    }

    /// Look up an oracle by name.
    pub fn find(&self, name: &str) -> Option<Arc<dyn Oracle>> {
        self.oracles.read().unwrap().get(name).cloned()
    }

    /// Unregister an oracle, returning it if it existed.
    pub fn remove(&self, name: &str) -> Option<Arc<dyn Oracle>> {
        self.oracles.write().unwrap().shift_remove(name)
    }

    /// Metadata for every registered oracle, in registration order.
    pub fn list(&self) -> Vec<OracleInfo> {
        self.oracles
            .read()
            .unwrap()
            .values()
            .map(|o| o.info())
            .collect()
    }

    /// Number of registered oracles.
    pub fn len(&self) -> usize {
        self.oracles.read().unwrap().len()
    }

    /// True if no oracles are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OracleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
