//! Error types for the Harmonic SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type HarmonicResult<T> = Result<T, HarmonicError>;

/// Error types that can occur when talking to the Harmonic API.
#[derive(Debug, thiserror::Error)]
pub enum HarmonicError {
    /// No API key has been configured yet.
    #[error("no credential configured")]
    MissingCredential,

    /// The API answered with a non-2xx status.
    #[error("{}", describe_failure(*status, body))]
    RequestFailure { status: u16, body: String },

    /// The request never produced a response (DNS, connect, reset, timeout).
    #[error("transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// A 2xx response whose body was not valid JSON.
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Classification of an upstream non-2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// 401: the key is missing or expired.
    Unauthorized,
    /// 403: a key was sent but the upstream rejected it.
    Forbidden,
    NotFound,
    RateLimited,
    /// Any 5xx.
    Upstream,
    /// Any other non-2xx status.
    Rejected,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::Upstream,
            _ => Self::Rejected,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::Upstream => "upstream_error",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable cause shown to the end user.
    pub fn cause(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized: API key missing or expired",
            Self::Forbidden => "forbidden: API key was rejected",
            Self::NotFound => "not found: the requested resource does not exist",
            Self::RateLimited => "rate limited: too many requests",
            Self::Upstream => "upstream error: the API failed to handle the request",
            Self::Rejected => "request rejected by the API",
        }
    }
}

fn describe_failure(status: u16, body: &str) -> String {
    let cause = FailureKind::from_status(status).cause();
    if body.trim().is_empty() {
        format!("{cause} (status {status})")
    } else {
        format!("{cause} (status {status}): {body}")
    }
}

impl HarmonicError {
    /// Classification for a `RequestFailure`, `None` for every other variant.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::RequestFailure { status, .. } => Some(FailureKind::from_status(*status)),
            _ => None,
        }
    }

    /// HTTP status for a `RequestFailure`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create a request failure from a status code and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::RequestFailure {
            status,
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_and_403_describe_different_causes() {
        let unauthorized = HarmonicError::from_response(401, "{\"error\":\"nope\"}");
        let forbidden = HarmonicError::from_response(403, "{\"error\":\"nope\"}");

        assert_eq!(unauthorized.failure_kind(), Some(FailureKind::Unauthorized));
        assert_eq!(forbidden.failure_kind(), Some(FailureKind::Forbidden));
        assert!(unauthorized.to_string().starts_with("unauthorized"));
        assert!(forbidden.to_string().starts_with("forbidden"));
        assert_ne!(unauthorized.to_string(), forbidden.to_string());
    }

    #[test]
    fn test_request_failure_keeps_raw_body() {
        let err = HarmonicError::from_response(422, "bad domain");
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.failure_kind(), Some(FailureKind::Rejected));
        assert!(err.to_string().ends_with("bad domain"));
    }

    #[test]
    fn test_empty_body_omits_trailing_colon() {
        let err = HarmonicError::from_response(503, "  ");
        assert_eq!(
            err.to_string(),
            "upstream error: the API failed to handle the request (status 503)"
        );
    }

    #[test]
    fn test_failure_kind_from_status() {
        assert_eq!(FailureKind::from_status(404), FailureKind::NotFound);
        assert_eq!(FailureKind::from_status(429), FailureKind::RateLimited);
        assert_eq!(FailureKind::from_status(500), FailureKind::Upstream);
        assert_eq!(FailureKind::from_status(400), FailureKind::Rejected);
        assert_eq!(FailureKind::Forbidden.as_str(), "forbidden");
    }

    #[test]
    fn test_non_request_failures_have_no_kind() {
        assert_eq!(HarmonicError::MissingCredential.failure_kind(), None);
        assert_eq!(HarmonicError::MissingCredential.status(), None);
    }
}
