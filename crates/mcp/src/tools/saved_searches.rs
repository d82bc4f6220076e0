// Saved search tools

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::paging::{with_paging, PageArgs};
use crate::tools::{
    json_result, json_schema_object, json_schema_string, parse_arguments, require_non_blank, Tool,
};
use harmonic_sdk::HarmonicClient;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const GET_SAVED_SEARCH_RESULTS: &str = "get_saved_search_results";

/// Tool to page through the results of a saved search
pub struct GetSavedSearchResultsTool {
    client: HarmonicClient,
}

impl GetSavedSearchResultsTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetSavedSearchResultsArgs {
    saved_search_id: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[async_trait::async_trait]
impl Tool for GetSavedSearchResultsTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        properties.insert(
            "saved_search_id".to_string(),
            json_schema_string("Identifier of the saved search"),
        );
        ToolSchema {
            name: GET_SAVED_SEARCH_RESULTS.to_string(),
            description: "Get results of a previously saved search. Results are paginated."
                .to_string(),
            input_schema: json_schema_object(
                with_paging(properties, self.client.default_page_size()),
                vec!["saved_search_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: GetSavedSearchResultsArgs =
            parse_arguments(GET_SAVED_SEARCH_RESULTS, arguments)?;
        require_non_blank("saved_search_id", &args.saved_search_id)?;
        let page = args.page.into_page()?;

        let results = self
            .client
            .saved_searches()
            .results(args.saved_search_id.trim(), &page)
            .await?;
        json_result(&results)
    }
}
