pub mod auth;
pub mod companies;
pub mod diagnostics;
mod paging;
pub mod people;
mod registry;
pub mod saved_searches;

pub use auth::SetApiKeyTool;
pub use companies::{GetCompanyByDomainTool, GetCompanyEmployeesTool, SearchCompaniesTool};
pub use diagnostics::TestConnectionTool;
pub use people::{GetPersonTool, SearchPeopleTool};
pub use registry::{
    json_result, json_schema_integer, json_schema_object, json_schema_string, parse_arguments,
    require_non_blank, Tool, ToolRegistry,
};
pub use saved_searches::GetSavedSearchResultsTool;

use harmonic_sdk::HarmonicClient;
use std::sync::Arc;

/// The full tool catalog, in the order it is listed to the host.
pub fn catalog(client: &HarmonicClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SetApiKeyTool::new(client.credentials().clone())));
    registry.register(Arc::new(SearchCompaniesTool::new(client.clone())));
    registry.register(Arc::new(GetCompanyByDomainTool::new(client.clone())));
    registry.register(Arc::new(SearchPeopleTool::new(client.clone())));
    registry.register(Arc::new(GetPersonTool::new(client.clone())));
    registry.register(Arc::new(GetCompanyEmployeesTool::new(client.clone())));
    registry.register(Arc::new(GetSavedSearchResultsTool::new(client.clone())));
    registry.register(Arc::new(TestConnectionTool::new(client.clone())));
    registry
}
