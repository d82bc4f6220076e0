//! Configuration types for the Harmonic SDK.

use crate::error::HarmonicError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.harmonic.ai";

/// Page size used when a list call does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Outbound request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the API key is attached to outbound requests.
///
/// A deployment commits to exactly one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `apikey: <key>` request header.
    #[default]
    ApiKeyHeader,
    /// `?apikey=<key>` query parameter.
    ApiKeyQuery,
    /// `Authorization: Bearer <key>` header.
    Bearer,
}

impl AuthScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiKeyHeader => "api_key_header",
            Self::ApiKeyQuery => "api_key_query",
            Self::Bearer => "bearer",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScheme {
    type Err = HarmonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "api_key_header" | "header" | "apikey" => Ok(Self::ApiKeyHeader),
            "api_key_query" | "query" => Ok(Self::ApiKeyQuery),
            "bearer" => Ok(Self::Bearer),
            other => Err(HarmonicError::Config(format!(
                "unknown auth scheme '{other}' (expected api_key_header, api_key_query or bearer)"
            ))),
        }
    }
}

/// Configuration for the Harmonic client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API.
    pub base_url: Url,
    /// Where the API key goes on each request.
    pub auth_scheme: AuthScheme,
    /// Request timeout.
    pub timeout: Duration,
    /// Page size for list calls that omit one.
    pub default_page_size: u32,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            auth_scheme: AuthScheme::default(),
            timeout: DEFAULT_TIMEOUT,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
