// Routes tool invocations to the registered tools

use crate::error::{ToolError, ToolResult};
use crate::observe::{DispatchEvent, DispatchObserver, TracingObserver};
use crate::protocol::{CallToolParams, CallToolResult, ListToolsResult};
use crate::tools::{self, ToolRegistry};
use harmonic_sdk::{CredentialStore, HarmonicClient};
use std::sync::Arc;
use std::time::Instant;

/// Whether an API key has been supplied yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unauthenticated,
    Authenticated,
}

/// Tool dispatcher.
///
/// Every tool except `set_api_key` is refused with a precondition error until
/// a key is stored. Each dispatch produces exactly one observer event.
pub struct Dispatcher {
    registry: ToolRegistry,
    credentials: Arc<CredentialStore>,
    observer: Arc<dyn DispatchObserver>,
}

impl Dispatcher {
    /// Dispatcher over the full catalog, logging through `tracing`.
    pub fn new(client: HarmonicClient) -> Self {
        let credentials = client.credentials().clone();
        Self::from_parts(
            tools::catalog(&client),
            credentials,
            Arc::new(TracingObserver),
        )
    }

    pub fn from_parts(
        registry: ToolRegistry,
        credentials: Arc<CredentialStore>,
        observer: Arc<dyn DispatchObserver>,
    ) -> Self {
        Self {
            registry,
            credentials,
            observer,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn phase(&self) -> Phase {
        if self.credentials.is_set() {
            Phase::Authenticated
        } else {
            Phase::Unauthenticated
        }
    }

    /// The static catalog. Available in either phase.
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.list_schemas(),
        }
    }

    pub async fn call_tool(&self, params: CallToolParams) -> ToolResult<CallToolResult> {
        let started = Instant::now();
        let name = params.name.clone();

        let result = self.route(params).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(err) => err.kind(),
        };
        self.observer.on_dispatch(&DispatchEvent {
            tool: &name,
            outcome,
            latency: started.elapsed(),
        });
        result
    }

    async fn route(&self, params: CallToolParams) -> ToolResult<CallToolResult> {
        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| ToolError::UnknownTool(params.name.clone()))?;

        if tool.requires_credential() && !self.credentials.is_set() {
            return Err(ToolError::Precondition);
        }

        // Run on its own task so a panicking tool surfaces as an internal
        // error instead of tearing down the server loop.
        let arguments = params.arguments;
        tokio::spawn(async move { tool.execute(arguments).await })
            .await
            .map_err(|e| ToolError::Internal(format!("tool '{}' aborted: {e}", params.name)))?
    }
}
