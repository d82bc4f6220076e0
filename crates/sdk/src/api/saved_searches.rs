//! Saved search endpoints.

use super::Page;
use crate::client::HarmonicClient;
use crate::error::HarmonicResult;
use crate::transport::ApiRequest;
use serde_json::Value;

/// Saved searches API.
pub struct SavedSearchesApi<'a> {
    client: &'a HarmonicClient,
}

impl<'a> SavedSearchesApi<'a> {
    pub(crate) fn new(client: &'a HarmonicClient) -> Self {
        Self { client }
    }

    /// Get a page of results from a previously saved search.
    pub async fn results(&self, saved_search_id: &str, page: &Page) -> HarmonicResult<Value> {
        let mut params = Vec::new();
        page.push_params(self.client.default_page_size(), &mut params);
        self.client
            .http
            .send(&ApiRequest::get(
                ["savedSearches:results", saved_search_id],
                params,
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::CredentialStore;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_results_path_and_cursor() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/savedSearches:results/ss-1"))
            .and(query_param("size", "3"))
            .and(query_param("cursor", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = CredentialStore::shared();
        credentials.set("k1");
        let client = HarmonicClient::builder()
            .base_url(server.uri())
            .credentials(credentials)
            .build()
            .unwrap();

        let page = Page::new(Some(3), Some("abc".to_string()));
        let result = client.saved_searches().results("ss-1", &page).await.unwrap();
        assert_eq!(result["count"], 3);
    }
}
