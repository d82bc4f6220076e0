//! Connection probe across candidate endpoint shapes.

use crate::client::HarmonicClient;
use crate::error::{FailureKind, HarmonicError, HarmonicResult};
use crate::transport::ApiRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Paths tried by [`DiagnosticsApi::probe`], in order.
pub const PROBE_PATHS: [&[&str]; 4] = [
    &["companies"],
    &["search", "companies"],
    &["persons"],
    &["savedSearches"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    Ok,
    /// 2xx whose body is not JSON, e.g. an HTML login page.
    UnexpectedBody,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    UpstreamError,
    Rejected,
    TransportError,
    Error,
}

impl From<FailureKind> for ProbeOutcome {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Unauthorized => Self::Unauthorized,
            FailureKind::Forbidden => Self::Forbidden,
            FailureKind::NotFound => Self::NotFound,
            FailureKind::RateLimited => Self::RateLimited,
            FailureKind::Upstream => Self::UpstreamError,
            FailureKind::Rejected => Self::Rejected,
        }
    }
}

/// Result of probing one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub path: String,
    pub outcome: ProbeOutcome,
    pub detail: String,
}

/// Diagnostics API.
pub struct DiagnosticsApi<'a> {
    client: &'a HarmonicClient,
}

impl<'a> DiagnosticsApi<'a> {
    pub(crate) fn new(client: &'a HarmonicClient) -> Self {
        Self { client }
    }

    /// GET every path in [`PROBE_PATHS`] one after another and report each
    /// outcome. Per-path failures are recorded, never returned; only a
    /// missing credential fails the whole probe.
    pub async fn probe(&self) -> HarmonicResult<Vec<ProbeRecord>> {
        self.client.credentials().current()?;

        let mut records = Vec::with_capacity(PROBE_PATHS.len());
        for segments in PROBE_PATHS {
            let request = ApiRequest::get(
                segments.iter().copied(),
                vec![("size".to_string(), "1".to_string())],
            );
            let path = request.path();
            let (outcome, detail) = match self.client.http.send(&request).await {
                Ok(body) => (ProbeOutcome::Ok, describe_body(&body)),
                Err(HarmonicError::Decode(e)) => (
                    ProbeOutcome::UnexpectedBody,
                    format!("responded with a non-JSON body: {e}"),
                ),
                Err(err @ HarmonicError::RequestFailure { .. }) => {
                    let kind = err.failure_kind().unwrap_or(FailureKind::Rejected);
                    (kind.into(), err.to_string())
                }
                Err(HarmonicError::TransportFailure(e)) => {
                    (ProbeOutcome::TransportError, e.to_string())
                }
                Err(err) => (ProbeOutcome::Error, err.to_string()),
            };
            debug!(path = %path, outcome = ?outcome, "probe");
            records.push(ProbeRecord {
                path,
                outcome,
                detail,
            });
        }
        Ok(records)
    }
}

fn describe_body(body: &Value) -> String {
    match body {
        Value::Array(items) => format!("responded with a JSON array of {} item(s)", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).take(8).collect();
            format!("responded with a JSON object (keys: {})", keys.join(", "))
        }
        Value::Null => "responded with an empty body".to_string(),
        _ => "responded with a JSON scalar".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::CredentialStore;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_probe_reports_every_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/companies"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/companies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/persons"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        // /savedSearches falls through to wiremock's default 404.

        let credentials = CredentialStore::shared();
        credentials.set("k1");
        let client = HarmonicClient::builder()
            .base_url(server.uri())
            .credentials(credentials)
            .build()
            .unwrap();

        let records = client.diagnostics().probe().await.unwrap();
        let outcomes: Vec<(&str, ProbeOutcome)> = records
            .iter()
            .map(|r| (r.path.as_str(), r.outcome))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                ("/companies", ProbeOutcome::Unauthorized),
                ("/search/companies", ProbeOutcome::Ok),
                ("/persons", ProbeOutcome::Forbidden),
                ("/savedSearches", ProbeOutcome::NotFound),
            ]
        );
        assert_eq!(records[1].detail, "responded with a JSON array of 2 item(s)");
        assert!(records[0].detail.contains("expired"));
    }

    #[tokio::test]
    async fn test_probe_flags_non_json_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/companies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body>Sign in</body></html>"),
            )
            .mount(&server)
            .await;

        let credentials = CredentialStore::shared();
        credentials.set("k1");
        let client = HarmonicClient::builder()
            .base_url(server.uri())
            .credentials(credentials)
            .build()
            .unwrap();

        let records = client.diagnostics().probe().await.unwrap();
        assert_eq!(records[0].outcome, ProbeOutcome::UnexpectedBody);
        assert!(records[0].detail.contains("non-JSON"));
        assert_eq!(
            serde_json::to_value(records[0].outcome).unwrap(),
            "unexpected_body"
        );
    }

    #[tokio::test]
    async fn test_probe_records_transport_errors() {
        let credentials = CredentialStore::shared();
        credentials.set("k1");
        // Nothing listens on port 9 of localhost in the test environment.
        let client = HarmonicClient::builder()
            .base_url("http://127.0.0.1:9")
            .credentials(credentials)
            .build()
            .unwrap();

        let records = client.diagnostics().probe().await.unwrap();
        assert_eq!(records.len(), PROBE_PATHS.len());
        assert!(records
            .iter()
            .all(|r| r.outcome == ProbeOutcome::TransportError));
    }

    #[tokio::test]
    async fn test_probe_requires_credential() {
        let client = HarmonicClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();

        let err = client.diagnostics().probe().await.unwrap_err();
        assert!(matches!(err, HarmonicError::MissingCredential));
    }
}
