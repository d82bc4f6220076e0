//! Main client for the Harmonic SDK.

use crate::api::*;
use crate::config::{AuthScheme, ClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT};
use crate::credential::CredentialStore;
use crate::error::{HarmonicError, HarmonicResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Harmonic API.
///
/// The client reads the API key from its [`CredentialStore`] on every call,
/// so a key set after construction is picked up without rebuilding.
#[derive(Debug, Clone)]
pub struct HarmonicClient {
    config: Arc<ClientConfig>,
    credentials: Arc<CredentialStore>,
    pub(crate) http: HttpTransport,
}

impl HarmonicClient {
    /// Create a new client builder.
    pub fn builder() -> HarmonicClientBuilder {
        HarmonicClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(
        config: ClientConfig,
        credentials: Arc<CredentialStore>,
    ) -> HarmonicResult<Self> {
        if config.default_page_size == 0 {
            return Err(HarmonicError::Config(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone(), credentials.clone())?;

        Ok(Self {
            config,
            credentials,
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The store this client reads its key from.
    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    pub fn default_page_size(&self) -> u32 {
        self.config.default_page_size
    }

    /// Get the companies API.
    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    /// Get the people API.
    pub fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    /// Get the saved searches API.
    pub fn saved_searches(&self) -> SavedSearchesApi<'_> {
        SavedSearchesApi::new(self)
    }

    /// Get the diagnostics API.
    pub fn diagnostics(&self) -> DiagnosticsApi<'_> {
        DiagnosticsApi::new(self)
    }
}

/// Builder for creating a HarmonicClient.
pub struct HarmonicClientBuilder {
    base_url: String,
    auth_scheme: AuthScheme,
    timeout: Duration,
    default_page_size: u32,
    credentials: Option<Arc<CredentialStore>>,
}

impl HarmonicClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_scheme: AuthScheme::default(),
            timeout: DEFAULT_TIMEOUT,
            default_page_size: DEFAULT_PAGE_SIZE,
            credentials: None,
        }
    }

    /// Set the base URL of the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set how the API key is sent.
    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the page size used when a list call omits one.
    pub fn default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Share an existing credential store. A fresh empty one is used otherwise.
    pub fn credentials(mut self, credentials: Arc<CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Build the client.
    pub fn build(self) -> HarmonicResult<HarmonicClient> {
        let base_url = Url::parse(&self.base_url)?;

        let config = ClientConfig {
            base_url,
            auth_scheme: self.auth_scheme,
            timeout: self.timeout,
            default_page_size: self.default_page_size,
        };

        HarmonicClient::from_config(config, self.credentials.unwrap_or_default())
    }
}

impl Default for HarmonicClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
