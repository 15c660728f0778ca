//! High-level client: `WikiClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::agent::client::Agents;
use crate::domain::wiki::client::Wikis;
use crate::error::{HttpError, SdkError};
use crate::http::{ClientConfig, Interceptors, WikiHttp};

use reqwest::{Request, Response};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::agent::client::Agents as AgentsClient;
pub use crate::domain::wiki::client::Wikis as WikisClient;

/// The primary entry point for the wiki SDK.
///
/// Construct one and hand it (or a clone) to whatever needs network access.
/// Clones share the connection pool and interceptors.
#[derive(Debug, Clone)]
pub struct WikiClient {
    pub(crate) http: WikiHttp,
}

impl WikiClient {
    pub fn builder() -> WikiClientBuilder {
        WikiClientBuilder::default()
    }

    /// Build a client configured from `REPOWIKI_API_BASE_URL`.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::builder().config(ClientConfig::from_env()).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn agents(&self) -> Agents<'_> {
        Agents { client: self }
    }

    pub fn wikis(&self) -> Wikis<'_> {
        Wikis { client: self }
    }

    /// Generic request layer, for endpoints without a dedicated wrapper.
    pub fn http(&self) -> &WikiHttp {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct WikiClientBuilder {
    config: ClientConfig,
    interceptors: Interceptors,
}

impl WikiClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn config(mut self, mut config: ClientConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        self.config = config;
        self
    }

    /// Hook run on every outgoing request, e.g. to attach headers.
    pub fn on_request<F>(mut self, f: F) -> Self
    where
        F: Fn(Request) -> Result<Request, HttpError> + Send + Sync + 'static,
    {
        self.interceptors = self.interceptors.on_request(f);
        self
    }

    /// Hook run on every received response.
    pub fn on_response<F>(mut self, f: F) -> Self
    where
        F: Fn(Response) -> Result<Response, HttpError> + Send + Sync + 'static,
    {
        self.interceptors = self.interceptors.on_response(f);
        self
    }

    pub fn build(self) -> Result<WikiClient, SdkError> {
        Ok(WikiClient {
            http: WikiHttp::new(self.config, self.interceptors)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = WikiClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "");
        assert_eq!(client.http().config().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_overrides() {
        let client = WikiClient::builder()
            .base_url("https://api.example.com/")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.http().config().timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_builder_config_trims_base_url() {
        let config = ClientConfig {
            base_url: "http://localhost:8000//".into(),
            timeout: Duration::from_secs(3),
        };
        let client = WikiClient::builder().config(config).build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.http().config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<WikiClient>();
    }
}
