//! Frontend configuration

use portal_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, TOKEN_STORAGE_KEY};
use std::time::Duration;

/// Settings baked into the bundle at build time
pub struct FrontendConfig;

impl FrontendConfig {
    /// API base URL; set `PORTAL_API_BASE_URL` when building for a deployment
    pub const API_BASE_URL: &'static str = match option_env!("PORTAL_API_BASE_URL") {
        Some(url) => url,
        None => DEFAULT_BASE_URL,
    };

    /// Request timeout in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = DEFAULT_TIMEOUT_MS;

    /// Local storage key for the bearer token
    pub const TOKEN_STORAGE_KEY: &'static str = TOKEN_STORAGE_KEY;

    #[must_use]
    pub fn client_config() -> ClientConfig {
        ClientConfig::new(
            Self::API_BASE_URL,
            Duration::from_millis(Self::REQUEST_TIMEOUT_MS),
        )
    }
}
