// Per-dispatch observability hook

use std::time::Duration;

/// One record per tool dispatch.
#[derive(Debug, Clone)]
pub struct DispatchEvent<'a> {
    pub tool: &'a str,
    /// `"ok"` or the error kind (see `ToolError::kind`).
    pub outcome: &'static str,
    pub latency: Duration,
}

impl DispatchEvent<'_> {
    pub fn is_ok(&self) -> bool {
        self.outcome == "ok"
    }
}

/// Receives one event per dispatch. Injected into the dispatcher.
pub trait DispatchObserver: Send + Sync {
    fn on_dispatch(&self, event: &DispatchEvent<'_>);
}

/// Emits each dispatch as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn on_dispatch(&self, event: &DispatchEvent<'_>) {
        let latency_ms = event.latency.as_millis() as u64;
        if event.is_ok() {
            tracing::info!(
                tool = event.tool,
                outcome = event.outcome,
                latency_ms,
                "tool dispatched"
            );
        } else {
            tracing::warn!(
                tool = event.tool,
                outcome = event.outcome,
                latency_ms,
                "tool dispatch failed"
            );
        }
    }
}
