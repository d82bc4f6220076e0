// Credential tool

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, parse_arguments, Tool};
use harmonic_sdk::CredentialStore;
use serde::Deserialize;
use std::sync::Arc;

pub const SET_API_KEY: &str = "set_api_key";

/// Stores the API key used by every other tool.
pub struct SetApiKeyTool {
    credentials: Arc<CredentialStore>,
}

impl SetApiKeyTool {
    pub fn new(credentials: Arc<CredentialStore>) -> Self {
        Self { credentials }
    }
}

#[derive(Debug, Deserialize)]
struct SetApiKeyArgs {
    api_key: String,
}

#[async_trait::async_trait]
impl Tool for SetApiKeyTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: SET_API_KEY.to_string(),
            description: "Set the Harmonic API key used for all subsequent requests. \
                          Call this before any other tool."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "api_key": json_schema_string("Your Harmonic API key")
                }),
                vec!["api_key"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        let args: SetApiKeyArgs = parse_arguments(SET_API_KEY, arguments)?;
        let credential = self.credentials.set(args.api_key);
        tracing::info!(key = %credential, "API key configured");

        Ok(CallToolResult::text(format!(
            "API key configured ({credential}). Harmonic tools are now available."
        )))
    }

    fn requires_credential(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_api_key_stores_value() {
        let credentials = CredentialStore::shared();
        let tool = SetApiKeyTool::new(credentials.clone());

        let result = tool.execute(json!({"api_key": "sk-abcdef"})).await.unwrap();
        assert_eq!(credentials.current().unwrap().expose(), "sk-abcdef");

        let text = result.first_text().unwrap();
        assert!(text.starts_with("API key configured (sk-a…)"));
        assert!(!text.contains("sk-abcdef"));
    }

    #[tokio::test]
    async fn test_set_api_key_rejects_non_string() {
        let credentials = CredentialStore::shared();
        let tool = SetApiKeyTool::new(credentials.clone());

        let err = tool.execute(json!({"api_key": 12345})).await.unwrap_err();
        assert!(matches!(err, ToolError::Validation { .. }));
        assert!(!credentials.is_set());

        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::Validation { .. }));
    }
}
