// Company tools: keyword search, domain lookup, employee listing

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::paging::{with_paging, PageArgs};
use crate::tools::{
    json_result, json_schema_object, json_schema_string, parse_arguments, require_non_blank, Tool,
};
use harmonic_sdk::HarmonicClient;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const SEARCH_COMPANIES: &str = "search_companies";
pub const GET_COMPANY_BY_DOMAIN: &str = "get_company_by_domain";
pub const GET_COMPANY_EMPLOYEES: &str = "get_company_employees";

/// Tool to search companies by keywords
pub struct SearchCompaniesTool {
    client: HarmonicClient,
}

impl SearchCompaniesTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchCompaniesArgs {
    query: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[async_trait::async_trait]
impl Tool for SearchCompaniesTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        properties.insert(
            "query".to_string(),
            json_schema_string("Free-text query, e.g. a company name, sector or keywords"),
        );
        ToolSchema {
            name: SEARCH_COMPANIES.to_string(),
            description: "Search companies matching a free-text query. Results are paginated; \
                          pass the returned cursor to fetch the next page."
                .to_string(),
            input_schema: json_schema_object(
                with_paging(properties, self.client.default_page_size()),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: SearchCompaniesArgs = parse_arguments(SEARCH_COMPANIES, arguments)?;
        require_non_blank("query", &args.query)?;
        let page = args.page.into_page()?;

        let results = self.client.companies().search(&args.query, &page).await?;
        json_result(&results)
    }
}

/// Tool to look up one company by website domain
pub struct GetCompanyByDomainTool {
    client: HarmonicClient,
}

impl GetCompanyByDomainTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetCompanyByDomainArgs {
    domain: String,
}

#[async_trait::async_trait]
impl Tool for GetCompanyByDomainTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: GET_COMPANY_BY_DOMAIN.to_string(),
            description: "Get a company's profile by its website domain".to_string(),
            input_schema: json_schema_object(
                json!({
                    "domain": json_schema_string("Website domain, e.g. acme.com")
                }),
                vec!["domain"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: GetCompanyByDomainArgs = parse_arguments(GET_COMPANY_BY_DOMAIN, arguments)?;
        require_non_blank("domain", &args.domain)?;

        let company = self.client.companies().by_domain(args.domain.trim()).await?;
        json_result(&company)
    }
}

/// Tool to list the employees of a company
pub struct GetCompanyEmployeesTool {
    client: HarmonicClient,
}

impl GetCompanyEmployeesTool {
    pub fn new(client: HarmonicClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetCompanyEmployeesArgs {
    company_id: String,
    #[serde(flatten)]
    page: PageArgs,
}

#[async_trait::async_trait]
impl Tool for GetCompanyEmployeesTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        properties.insert(
            "company_id".to_string(),
            json_schema_string("Company identifier as returned by the search tools"),
        );
        ToolSchema {
            name: GET_COMPANY_EMPLOYEES.to_string(),
            description: "List employees of a company. Results are paginated.".to_string(),
            input_schema: json_schema_object(
                with_paging(properties, self.client.default_page_size()),
                vec!["company_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: GetCompanyEmployeesArgs = parse_arguments(GET_COMPANY_EMPLOYEES, arguments)?;
        require_non_blank("company_id", &args.company_id)?;
        let page = args.page.into_page()?;

        let employees = self
            .client
            .companies()
            .employees(args.company_id.trim(), &page)
            .await?;
        json_result(&employees)
    }
}
