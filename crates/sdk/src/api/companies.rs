//! Company endpoints.

use super::Page;
use crate::client::HarmonicClient;
use crate::error::HarmonicResult;
use crate::transport::ApiRequest;
use serde_json::{json, Value};

/// Companies API: keyword search, domain lookup and employee listing.
pub struct CompaniesApi<'a> {
    client: &'a HarmonicClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(client: &'a HarmonicClient) -> Self {
        Self { client }
    }

    /// Search companies matching a free-text query.
    pub async fn search(&self, query: &str, page: &Page) -> HarmonicResult<Value> {
        let mut params = vec![("query".to_string(), query.to_string())];
        page.push_params(self.client.default_page_size(), &mut params);
        self.client
            .http
            .send(&ApiRequest::get(["search", "companies"], params))
            .await
    }

    /// Look up a single company by its website domain.
    ///
    /// Uses the body-based lookup (`POST /companies`).
    pub async fn by_domain(&self, domain: &str) -> HarmonicResult<Value> {
        let body = json!({ "website_domain": domain });
        self.client
            .http
            .send(&ApiRequest::post_json(["companies"], body))
            .await
    }

    /// List employees of a company.
    pub async fn employees(&self, company_id: &str, page: &Page) -> HarmonicResult<Value> {
        let mut params = Vec::new();
        page.push_params(self.client.default_page_size(), &mut params);
        self.client
            .http
            .send(&ApiRequest::get(["companies", company_id, "employees"], params))
            .await
    }
}
