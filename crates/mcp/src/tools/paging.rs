// Shared paging arguments for list-style tools

use crate::error::{ToolError, ToolResult};
use crate::tools::{json_schema_integer, json_schema_string};
use harmonic_sdk::Page;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageArgs {
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    cursor: Option<String>,
}

impl PageArgs {
    /// An empty cursor string is treated as no cursor; any other value is
    /// passed through untouched.
    pub(crate) fn into_page(self) -> ToolResult<Page> {
        if self.size == Some(0) {
            return Err(ToolError::invalid_field("size", "'size' must be at least 1"));
        }
        let cursor = self.cursor.filter(|c| !c.is_empty());
        Ok(Page::new(self.size, cursor))
    }
}

/// Adds the `size` and `cursor` properties to a tool's schema properties.
pub(crate) fn with_paging(mut properties: Map<String, Value>, default_size: u32) -> Value {
    properties.insert(
        "size".to_string(),
        json_schema_integer("Number of results per page", default_size),
    );
    properties.insert(
        "cursor".to_string(),
        json_schema_string("Pagination cursor returned by a previous call; omit for the first page"),
    );
    Value::Object(properties)
}
