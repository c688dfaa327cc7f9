//! Client configuration

use std::time::Duration;

/// Base address the application talks to. Replace per deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Local storage key the login flow writes the bearer token under
pub const TOKEN_STORAGE_KEY: &str = "userToken";

/// Immutable settings a client is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration; a trailing slash on the base URL is dropped
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join a request path onto the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
        )
    }
}
