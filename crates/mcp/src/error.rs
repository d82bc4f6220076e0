// Tool-call error taxonomy reported back to the host

use crate::protocol::JsonRpcError;
use harmonic_sdk::HarmonicError;
use serde_json::json;

pub type ToolResult<T> = Result<T, ToolError>;

/// Every failure a tool call can produce. Each variant maps to a stable
/// JSON-RPC error code and `data.kind`.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Missing or malformed tool arguments.
    #[error("invalid arguments: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    /// A tool other than `set_api_key` was called before a key was set.
    #[error("credential not configured: call set_api_key first")]
    Precondition,

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The API client failed; carries the client error unchanged.
    #[error("tool execution failed: {0}")]
    Execution(#[source] HarmonicError),

    /// Anything not covered above.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub const PRECONDITION_CODE: i32 = -32001;
    pub const EXECUTION_CODE: i32 = -32002;

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Validation { .. } => JsonRpcError::INVALID_PARAMS,
            Self::Precondition => Self::PRECONDITION_CODE,
            Self::UnknownTool(_) => JsonRpcError::METHOD_NOT_FOUND,
            Self::Execution(_) => Self::EXECUTION_CODE,
            Self::Internal(_) => JsonRpcError::INTERNAL_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Precondition => "precondition_error",
            Self::UnknownTool(_) => "unknown_tool",
            Self::Execution(_) => "tool_execution_error",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn to_rpc_error(&self) -> JsonRpcError {
        let mut data = json!({ "kind": self.kind() });
        match self {
            Self::Validation {
                field: Some(field), ..
            } => {
                data["field"] = json!(field);
            }
            Self::UnknownTool(name) => {
                data["tool"] = json!(name);
            }
            Self::Execution(source) => match source {
                HarmonicError::RequestFailure { status, body } => {
                    data["failure"] = json!(source.failure_kind().map(|k| k.as_str()));
                    data["status"] = json!(status);
                    data["body"] = json!(body);
                }
                HarmonicError::TransportFailure(_) => {
                    data["failure"] = json!("transport_failure");
                }
                _ => {}
            },
            Self::Precondition => {
                data["hint"] = json!("Call set_api_key with your API key, then retry.");
            }
            _ => {}
        }
        JsonRpcError::custom(self.code(), self.to_string()).with_data(data)
    }
}

impl From<HarmonicError> for ToolError {
    fn from(err: HarmonicError) -> Self {
        match err {
            HarmonicError::MissingCredential => Self::Precondition,
            other => Self::Execution(other),
        }
    }
}

impl From<anyhow::Error> for ToolError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
