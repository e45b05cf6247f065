//! Budgeted oracle invocation.
//!
//! The invoker is the only path from a call request to an oracle body.
//! It looks up the oracle, snapshots the store, runs the body on a
//! blocking thread under a wall-clock budget and folds every failure
//! mode into a `success=false` envelope. Nothing an oracle does can
//! surface as a panic or a transport error.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::context::InvocationContext;
use crate::oracle::OracleRegistry;
use crate::payload::encode_payload;
use vectord_store::RecordStore;
use vectord_types::{
    CallRequest, CallResponse, CompressionSettings, InvocationSettings, InvokeError,
};

/// Runs oracles against the store under the configured limits.
pub struct Invoker {
    store: Arc<RecordStore>,
    registry: Arc<OracleRegistry>,
    invocation: InvocationSettings,
    compression: CompressionSettings,
}

impl Invoker {
    pub fn new(
        store: Arc<RecordStore>,
        registry: Arc<OracleRegistry>,
        invocation: InvocationSettings,
        compression: CompressionSettings,
    ) -> Self {
        Self {
            store,
            registry,
            invocation,
            compression,
        }
    }

    /// Execute a call request, producing a response envelope.
    ///
    /// The oracle body runs on a blocking thread. If it exceeds the
    /// budget the worker is abandoned (it finishes in the background
    /// with no observer) and the caller gets a timeout failure.
    pub async fn run(&self, request: &CallRequest) -> CallResponse {
        let oracle = match self.registry.find(&request.oracle) {
            Some(oracle) => oracle,
            None => {
                return CallResponse::failure(
                    InvokeError::OracleNotFound(request.oracle.clone()).to_string(),
                )
            }
        };

        debug!(oracle = %request.oracle, id = request.id, "invoking oracle");

        let snapshot = self.store.records();
        let id = request.id;
        let args = request.args.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let ctx = InvocationContext::new(snapshot);
            oracle.invoke(&ctx, id, &args)
        });

        let budget_ms = self.invocation.budget_ms;
        let joined = match tokio::time::timeout(Duration::from_millis(budget_ms), handle).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(oracle = %request.oracle, budget_ms, "invocation timed out");
                return CallResponse::failure(InvokeError::Timeout { budget_ms }.to_string());
            }
        };

        let result = match joined {
            Ok(result) => result,
            // the body panicked; report it as a failed invocation
            Err(join_err) => {
                warn!(oracle = %request.oracle, "oracle aborted: {}", join_err);
                return CallResponse::failure(format!(
                    "error while running oracle {}: invocation aborted",
                    request.oracle
                ));
            }
        };

        match result {
            Ok(value) => match encode_payload(&value, self.compression.min_bytes) {
                Ok(payload) => CallResponse::success(payload),
                Err(e) => CallResponse::failure(format!(
                    "error while serializing return value of oracle {}: {}",
                    request.oracle, e
                )),
            },
            Err(e) => CallResponse::failure(format!(
                "error while running oracle {}: {}",
                request.oracle, e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Oracle;
    use crate::payload::decode_payload;
    use serde_json::Value;
    use vectord_types::Record;

    fn invoker_with(records: Vec<Vec<f32>>, budget_ms: u64) -> Invoker {
        let store = Arc::new(RecordStore::in_memory());
        for data in records {
            store.create(Record::new(data)).unwrap();
        }
        Invoker::new(
            store,
            Arc::new(OracleRegistry::with_builtins()),
            InvocationSettings { budget_ms },
            CompressionSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_run_unknown_oracle_fails() {
        let invoker = invoker_with(vec![], 1000);
        let resp = invoker.run(&CallRequest::new("missing", 1)).await;
        assert!(!resp.success);
        assert!(resp.message.contains("missing"));
        assert!(resp.data.is_none());
    }

    #[tokio::test]
    async fn test_run_missing_record_reports_id_not_crash() {
        let invoker = invoker_with(vec![vec![1.0, 0.0]], 1000);
        let resp = invoker.run(&CallRequest::new("dot_all", 404)).await;
        assert!(!resp.success);
        assert!(resp.message.contains("404"));
    }

    #[tokio::test]
    async fn test_run_success_payload_roundtrip() {
        let invoker = invoker_with(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]], 1000);
        let resp = invoker.run(&CallRequest::new("dot_all", 1)).await;
        assert!(resp.success, "{}", resp.message);

        let value = decode_payload(&resp.data.unwrap()).unwrap();
        assert_eq!(value.as_f64().unwrap(), 1.0);
    }

    #[tokio::test]
    async fn test_slow_oracle_times_out() {
        struct Sleeper;

        impl Oracle for Sleeper {
            fn name(&self) -> &str {
                "sleeper"
            }

            fn invoke(
                &self,
                _ctx: &InvocationContext,
                _id: u64,
                _args: &[Value],
            ) -> Result<Value, InvokeError> {
                std::thread::sleep(Duration::from_millis(250));
                Ok(Value::Null)
            }
        }

        let registry = OracleRegistry::new();
        registry.register(Arc::new(Sleeper)).unwrap();
        let invoker = Invoker::new(
            Arc::new(RecordStore::in_memory()),
            Arc::new(registry),
            InvocationSettings { budget_ms: 20 },
            CompressionSettings::default(),
        );

        let resp = invoker.run(&CallRequest::new("sleeper", 1)).await;
        assert!(!resp.success);
        assert!(resp.message.contains("budget"));
    }

    #[tokio::test]
    async fn test_panicking_oracle_becomes_failure_envelope() {
        struct Bomb;

        impl Oracle for Bomb {
            fn name(&self) -> &str {
                "bomb"
            }

            fn invoke(
                &self,
                _ctx: &InvocationContext,
                _id: u64,
                _args: &[Value],
            ) -> Result<Value, InvokeError> {
                panic!("boom");
            }
        }

        let registry = OracleRegistry::new();
        registry.register(Arc::new(Bomb)).unwrap();
        let invoker = Invoker::new(
            Arc::new(RecordStore::in_memory()),
            Arc::new(registry),
            InvocationSettings::default(),
            CompressionSettings::default(),
        );

        let resp = invoker.run(&CallRequest::new("bomb", 1)).await;
        assert!(!resp.success);
        assert!(resp.message.contains("bomb"));
    }
}
