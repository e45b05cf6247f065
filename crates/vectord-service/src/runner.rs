//! Invocation handler.

use std::sync::Arc;

use vectord_engine::Invoker;
use vectord_types::{CallRequest, CallResponse};

/// Handler for oracle invocations.
pub struct RunnerHandler {
    invoker: Arc<Invoker>,
}

impl RunnerHandler {
    pub fn new(invoker: Arc<Invoker>) -> Self {
        Self { invoker }
    }

    /// Run an oracle. All failure modes come back as a
    /// `success=false` envelope.
    pub async fn run(&self, request: &CallRequest) -> CallResponse {
        self.invoker.run(request).await
    }
}
