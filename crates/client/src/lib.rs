//! Portal API client
//!
//! A single pre-configured HTTP client for the whole application. Every
//! request passes through a chain of [`RequestInterceptor`]s before it is
//! sent; the default chain holds a [`BearerTokenInterceptor`] that reads the
//! signed-in user's token from a [`TokenStore`] and sets
//! `Authorization: Bearer <token>`.

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod store;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, TOKEN_STORAGE_KEY};
pub use error::{ClientError, InterceptError, StoreError};
pub use interceptor::{BearerTokenInterceptor, RequestInterceptor};
pub use store::{MemoryTokenStore, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageTokenStore;
