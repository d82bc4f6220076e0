// Server configuration: TOML file plus command-line/env overrides

use anyhow::{Context, Result};
use harmonic_sdk::config::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use harmonic_sdk::{AuthScheme, CredentialStore, HarmonicClient};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Where and how to reach the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub auth_scheme: AuthScheme,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_scheme: AuthScheme::default(),
            timeout_secs: default_timeout_secs(),
            default_page_size: default_page_size(),
        }
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub auth_scheme: Option<AuthScheme>,
    pub timeout_secs: Option<u64>,
    pub default_page_size: Option<u32>,
}

impl McpConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let upstream = &mut self.upstream;
        if let Some(base_url) = &overrides.base_url {
            upstream.base_url = base_url.clone();
        }
        if let Some(scheme) = overrides.auth_scheme {
            upstream.auth_scheme = scheme;
        }
        if let Some(secs) = overrides.timeout_secs {
            upstream.timeout_secs = secs;
        }
        if let Some(size) = overrides.default_page_size {
            upstream.default_page_size = size;
        }
    }

    pub fn build_client(&self, credentials: Arc<CredentialStore>) -> Result<HarmonicClient> {
        if self.upstream.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        HarmonicClient::builder()
            .base_url(&self.upstream.base_url)
            .auth_scheme(self.upstream.auth_scheme)
            .timeout(Duration::from_secs(self.upstream.timeout_secs))
            .default_page_size(self.upstream.default_page_size)
            .credentials(credentials)
            .build()
            .context("Failed to build API client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = McpConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.upstream.base_url, "https://api.harmonic.ai");
        assert_eq!(config.upstream.auth_scheme, AuthScheme::ApiKeyHeader);
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.upstream.default_page_size, 10);
    }

    #[test]
    fn test_file_then_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[upstream]\nauth_scheme = \"bearer\"\ndefault_page_size = 50\ntimeout_secs = 5"
        )
        .unwrap();

        let mut config = McpConfig::load(file.path()).unwrap();
        assert_eq!(config.upstream.auth_scheme, AuthScheme::Bearer);
        assert_eq!(config.upstream.default_page_size, 50);
        assert_eq!(config.upstream.base_url, "https://api.harmonic.ai");

        config.apply_overrides(&ConfigOverrides {
            base_url: Some("http://localhost:4010".to_string()),
            default_page_size: Some(20),
            ..Default::default()
        });
        assert_eq!(config.upstream.base_url, "http://localhost:4010");
        assert_eq!(config.upstream.default_page_size, 20);
        assert_eq!(config.upstream.timeout_secs, 5);

        let client = config.build_client(CredentialStore::shared()).unwrap();
        assert_eq!(client.default_page_size(), 20);
        assert_eq!(client.config().auth_scheme, AuthScheme::Bearer);
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upstream\nbase_url = ").unwrap();

        let err = McpConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = McpConfig::default();
        config.upstream.timeout_secs = 0;
        assert!(config.build_client(CredentialStore::shared()).is_err());
    }
}
