// MCP (Model Context Protocol) server for the Harmonic API
// Exposes company and people lookups as tools to agent clients over stdio.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod observe;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{ConfigOverrides, McpConfig};
pub use dispatcher::{Dispatcher, Phase};
pub use error::{ToolError, ToolResult};
pub use observe::{DispatchEvent, DispatchObserver, TracingObserver};
pub use server::McpServer;
