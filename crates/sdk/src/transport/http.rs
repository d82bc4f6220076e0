//! HTTP transport layer for the Harmonic SDK.

use crate::config::{AuthScheme, ClientConfig};
use crate::credential::{Credential, CredentialStore};
use crate::error::{HarmonicError, HarmonicResult};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the header or query parameter carrying the key for the
/// `api_key_*` schemes.
pub const API_KEY_PARAM: &str = "apikey";

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Query(Vec<(String, String)>),
    Json(Value),
}

/// One outbound call: a path plus either query parameters or a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    payload: Payload,
}

impl ApiRequest {
    /// GET with ordered query parameters. Segments are percent-encoded
    /// individually when the URL is built.
    pub fn get<I, S>(segments: I, query: Vec<(String, String)>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            method: Method::GET,
            segments: segments.into_iter().map(|s| s.as_ref().to_string()).collect(),
            payload: Payload::Query(query),
        }
    }

    /// POST with a JSON body and no query parameters.
    pub fn post_json<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            method: Method::POST,
            segments: segments.into_iter().map(|s| s.as_ref().to_string()).collect(),
            payload: Payload::Json(body),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unencoded path, for logs and probe reports.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query(&self) -> &[(String, String)] {
        match &self.payload {
            Payload::Query(pairs) => pairs,
            Payload::Json(_) => &[],
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Query(_) => None,
            Payload::Json(body) => Some(body),
        }
    }
}

/// A client that cannot be constructed is a setup problem, not a network one.
fn client_build_error(err: reqwest::Error) -> HarmonicError {
    HarmonicError::Config(format!("failed to build HTTP client: {err}"))
}

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
    credentials: Arc<CredentialStore>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(
        config: Arc<ClientConfig>,
        credentials: Arc<CredentialStore>,
    ) -> HarmonicResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("harmonic-sdk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(client_build_error)?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a URL for the given request path.
    fn build_url(&self, request: &ApiRequest) -> HarmonicResult<url::Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                HarmonicError::Config(format!(
                    "base URL '{}' cannot carry a path",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }

    fn authorize(&self, builder: RequestBuilder, credential: &Credential) -> RequestBuilder {
        match self.config.auth_scheme {
            AuthScheme::ApiKeyHeader => builder.header(API_KEY_PARAM, credential.expose()),
            AuthScheme::ApiKeyQuery => builder.query(&[(API_KEY_PARAM, credential.expose())]),
            AuthScheme::Bearer => builder.bearer_auth(credential.expose()),
        }
    }

    /// Execute a request and parse the response as JSON.
    ///
    /// Exactly one attempt is made. An empty 2xx body yields `Value::Null`.
    pub async fn send(&self, request: &ApiRequest) -> HarmonicResult<Value> {
        let credential = self.credentials.current()?;
        let url = self.build_url(request)?;
        debug!(
            method = %request.method,
            path = %request.path(),
            auth = %self.config.auth_scheme,
            key = %credential,
            "API request"
        );

        let mut builder = self.client.request(request.method.clone(), url);
        builder = match &request.payload {
            Payload::Query(pairs) if !pairs.is_empty() => builder.query(pairs),
            Payload::Query(_) => builder,
            Payload::Json(body) => builder.json(body),
        };
        builder = self.authorize(builder, &credential);

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                method = %request.method,
                path = %request.path(),
                status = status.as_u16(),
                "API request failed"
            );
            return Err(HarmonicError::from_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_build_error_is_config() {
        let err = Client::new().get("not a url").build().unwrap_err();
        let mapped = client_build_error(err);

        assert!(matches!(mapped, HarmonicError::Config(_)));
        assert!(mapped.to_string().starts_with("configuration error: failed to build HTTP client"));
    }

    fn create_transport(base_url: &str, scheme: AuthScheme) -> HttpTransport {
        let mut config = ClientConfig::new(url::Url::parse(base_url).unwrap());
        config.auth_scheme = scheme;
        let credentials = CredentialStore::shared();
        credentials.set("sk-test-key");
        HttpTransport::new(Arc::new(config), credentials).unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_request_descriptor_holds_query_or_body() {
        let get = ApiRequest::get(["search", "companies"], pairs(&[("query", "acme")]));
        assert_eq!(get.path(), "/search/companies");
        assert_eq!(get.query().len(), 1);
        assert!(get.body().is_none());

        let post = ApiRequest::post_json(["companies"], json!({"website_domain": "acme.com"}));
        assert_eq!(post.method(), &Method::POST);
        assert!(post.query().is_empty());
        assert!(post.body().is_some());
    }

    #[tokio::test]
    async fn test_get_with_query_and_api_key_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/companies"))
            .and(query_param("query", "acme corp"))
            .and(header("apikey", "sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri(), AuthScheme::ApiKeyHeader);
        let request = ApiRequest::get(["search", "companies"], pairs(&[("query", "acme corp")]));
        let result = transport.send(&request).await.unwrap();
        assert_eq!(result, json!({"results": []}));
    }

    #[tokio::test]
    async fn test_bearer_scheme_sends_authorization_only() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/persons/42"))
            .and(header("Authorization", "Bearer sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri(), AuthScheme::Bearer);
        let request = ApiRequest::get(["persons", "42"], Vec::new());
        transport.send(&request).await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("apikey"));
        assert!(received[0].url.query().is_none());
    }

    #[tokio::test]
    async fn test_query_scheme_puts_key_in_query() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/companies"))
            .and(query_param("apikey", "sk-test-key"))
            .and(body_json(json!({"website_domain": "acme.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Acme"})))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri(), AuthScheme::ApiKeyQuery);
        let request = ApiRequest::post_json(["companies"], json!({"website_domain": "acme.com"}));
        let result = transport.send(&request).await.unwrap();
        assert_eq!(result["name"], "Acme");

        let received = server.received_requests().await.unwrap();
        assert!(!received[0].headers.contains_key("authorization"));
        assert!(!received[0].headers.contains_key("apikey"));
    }

    #[tokio::test]
    async fn test_path_segments_are_percent_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/persons/a%2Fb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri(), AuthScheme::ApiKeyHeader);
        let request = ApiRequest::get(["persons", "a/b"], Vec::new());
        transport.send(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/persons/1"))
            .respond_with(ResponseTemplate::new(403).set_body_string("key revoked"))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri(), AuthScheme::ApiKeyHeader);
        let err = transport
            .send(&ApiRequest::get(["persons", "1"], Vec::new()))
            .await
            .unwrap_err();

        match err {
            HarmonicError::RequestFailure { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "key revoked");
            }
            other => panic!("Expected RequestFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap());
        let transport = HttpTransport::new(Arc::new(config), CredentialStore::shared()).unwrap();
        let err = transport
            .send(&ApiRequest::get(["persons", "1"], Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, HarmonicError::MissingCredential));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let mut config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap());
        config.timeout = Duration::from_millis(50);
        let credentials = CredentialStore::shared();
        credentials.set("k");
        let transport = HttpTransport::new(Arc::new(config), credentials).unwrap();

        let err = transport
            .send(&ApiRequest::get(["persons", "1"], Vec::new()))
            .await
            .unwrap_err();
        match err {
            HarmonicError::TransportFailure(e) => assert!(e.is_timeout()),
            other => panic!("Expected TransportFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri(), AuthScheme::ApiKeyHeader);
        let result = transport
            .send(&ApiRequest::get(["persons", "1"], Vec::new()))
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_build_url_with_base_path() {
        let config = ClientConfig::new(url::Url::parse("http://localhost:8080/v2/").unwrap());
        let transport = HttpTransport::new(Arc::new(config), CredentialStore::shared()).unwrap();

        let request = ApiRequest::get(["savedSearches:results", "77"], Vec::new());
        let url = transport.build_url(&request).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v2/savedSearches:results/77");
    }
}
