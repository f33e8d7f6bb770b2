//! Client facade for the Astrux prediction API.
//!
//! Keeps the public surface small and predictable: configuration lives on
//! [`Astrux`], operations live on the namespaced sub-clients.

mod models;

pub use models::ModelsClient;

use crate::config::{ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::error::Error;
use crate::Result;
use std::env;
use std::time::Duration;

/// Entry point for the Astrux API.
///
/// Construction resolves the API key (explicit argument, then the
/// `ASTRUX_API_KEY` environment variable) and fails synchronously when
/// neither is set. Configuration never changes after construction.
#[derive(Debug)]
pub struct Astrux {
    config: ClientConfig,
    models: ModelsClient,
}

impl Astrux {
    pub fn builder() -> AstruxBuilder {
        AstruxBuilder::new()
    }

    /// Sub-client for model operations.
    pub fn models(&self) -> &ModelsClient {
        &self.models
    }

    /// The resolved client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Builder for [`Astrux`].
pub struct AstruxBuilder {
    api_key: Option<String>,
    timeout_ms: Option<u64>,
    base_url: Option<String>,
}

impl AstruxBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            timeout_ms: None,
            base_url: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Request timeout in milliseconds. Defaults to 30000.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Override the API base URL. Used for tests and private deployments.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<Astrux> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
            .ok_or_else(|| {
                Error::authentication(format!(
                    "Missing API key. Pass `api_key` or set {}",
                    API_KEY_ENV
                ))
            })?;

        let config = ClientConfig {
            api_key,
            timeout: Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Astrux {
            models: ModelsClient::new(http, config.clone()),
            config,
        })
    }
}

impl Default for AstruxBuilder {
    fn default() -> Self {
        Self::new()
    }
}
