// Tool trait, registry and schema helpers

use crate::error::{ToolError, ToolResult};
use crate::protocol::{CallToolResult, ToolSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult>;

    /// Whether the tool needs an API key before it may run.
    fn requires_credential(&self) -> bool {
        true
    }
}

/// Tool registry for managing available tools
///
/// Schemas are listed in registration order.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool. A tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.by_name.get(&name) {
            Some(&index) => self.tools[index] = tool,
            None => {
                self.by_name.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.by_name.get(name).map(|&index| self.tools[index].clone())
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize a tool's argument object. `null` counts as `{}`.
pub fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> ToolResult<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        Value::Object(map) => Value::Object(map),
        _ => {
            return Err(ToolError::validation(format!(
                "arguments for {tool} must be a JSON object"
            )))
        }
    };
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::validation(format!("{tool}: {e}")))
}

/// Reject empty or whitespace-only values for a required string.
pub fn require_non_blank(field: &str, value: &str) -> ToolResult<()> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_field(
            field,
            format!("'{field}' must not be empty"),
        ));
    }
    Ok(())
}

/// Pretty-printed JSON of an upstream response as a single text block.
pub fn json_result(value: &Value) -> ToolResult<CallToolResult> {
    Ok(CallToolResult::text(serde_json::to_string_pretty(value)?))
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str, default: u32) -> Value {
    serde_json::json!({
        "type": "integer",
        "description": description,
        "minimum": 1,
        "default": default
    })
}
