//! People endpoints.

use super::Page;
use crate::client::HarmonicClient;
use crate::error::HarmonicResult;
use crate::transport::ApiRequest;
use serde_json::Value;

/// People API: keyword search and person lookup.
pub struct PeopleApi<'a> {
    client: &'a HarmonicClient,
}

impl<'a> PeopleApi<'a> {
    pub(crate) fn new(client: &'a HarmonicClient) -> Self {
        Self { client }
    }

    /// Search people matching a free-text query.
    pub async fn search(&self, query: &str, page: &Page) -> HarmonicResult<Value> {
        let mut params = vec![("query".to_string(), query.to_string())];
        page.push_params(self.client.default_page_size(), &mut params);
        self.client
            .http
            .send(&ApiRequest::get(["search", "people"], params))
            .await
    }

    /// Get a person by identifier.
    pub async fn get(&self, person_id: &str) -> HarmonicResult<Value> {
        self.client
            .http
            .send(&ApiRequest::get(["persons", person_id], Vec::new()))
            .await
    }
}
