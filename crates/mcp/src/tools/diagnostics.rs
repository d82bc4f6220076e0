// Connection probe tool

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, Tool};
use harmonic_sdk::HarmonicClient;
use serde_json::{json, Value};

pub const TEST_CONNECTION: &str = "test_connection";

/// Tries each candidate endpoint shape and reports what answered.
pub struct TestConnectionTool {
    client: HarmonicClient,
}

impl TestConnectionTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for TestConnectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: TEST_CONNECTION.to_string(),
            description: "Check connectivity and authentication against several API paths. \
                          Returns one {path, outcome, detail} record per path."
                .to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: Value) -> ToolResult<CallToolResult> {
        let records = self.client.diagnostics().probe().await?;
        Ok(CallToolResult::text(serde_json::to_string_pretty(&records)?))
    }
}
