//! Client configuration and endpoint defaults.

use std::time::Duration;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.astrux.io/api";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "ASTRUX_API_KEY";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Immutable client configuration, resolved once at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) timeout: Duration,
    pub(crate) base_url: String,
}

impl ClientConfig {
    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The API base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
