// People tools

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::paging::{with_paging, PageArgs};
use crate::tools::{
    json_result, json_schema_object, json_schema_string, parse_arguments, require_non_blank, Tool,
};
use harmonic_sdk::HarmonicClient;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const SEARCH_PEOPLE: &str = "search_people";
pub const GET_PERSON: &str = "get_person";

/// Tool to search people by keywords
pub struct SearchPeopleTool {
    client: HarmonicClient,
}

impl SearchPeopleTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPeopleArgs {
    query: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[async_trait::async_trait]
impl Tool for SearchPeopleTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        properties.insert(
            "query".to_string(),
            json_schema_string("Free-text query, e.g. a name, title or skill"),
        );
        ToolSchema {
            name: SEARCH_PEOPLE.to_string(),
            description: "Search people matching a free-text query. Results are paginated."
                .to_string(),
            input_schema: json_schema_object(
                with_paging(properties, self.client.default_page_size()),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: SearchPeopleArgs = parse_arguments(SEARCH_PEOPLE, arguments)?;
        require_non_blank("query", &args.query)?;
        let page = args.page.into_page()?;

        let results = self.client.people().search(&args.query, &page).await?;
        json_result(&results)
    }
}

/// Tool to get one person by id
pub struct GetPersonTool {
    client: HarmonicClient,
}

impl GetPersonTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetPersonArgs {
    person_id: String,
}

#[async_trait::async_trait]
impl Tool for GetPersonTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: GET_PERSON.to_string(),
            description: "Get a person's profile by identifier".to_string(),
            input_schema: json_schema_object(
                json!({
                    "person_id": json_schema_string("Person identifier as returned by the search tools")
                }),
                vec!["person_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: GetPersonArgs = parse_arguments(GET_PERSON, arguments)?;
        require_non_blank("person_id", &args.person_id)?;

        let person = self.client.people().get(args.person_id.trim()).await?;
        json_result(&person)
    }
}
