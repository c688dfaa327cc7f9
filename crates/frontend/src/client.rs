//! Client configuration and initialization

use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use portal_client::{ApiClient, ClientError, TokenStore};
use std::rc::Rc;
use std::sync::Arc;
use yew::prelude::*;

thread_local! {
    /// The application's one API client, built on first use
    static API_CLIENT: OnceCell<Rc<ApiClient>> = const { OnceCell::new() };
}

#[cfg(target_arch = "wasm32")]
fn token_store() -> Arc<dyn TokenStore> {
    Arc::new(portal_client::LocalStorageTokenStore::new(
        FrontendConfig::TOKEN_STORAGE_KEY,
    ))
}

// Off the browser there is no localStorage; nothing is ever signed in
#[cfg(not(target_arch = "wasm32"))]
fn token_store() -> Arc<dyn TokenStore> {
    Arc::new(portal_client::MemoryTokenStore::new())
}

fn build_client() -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .config(FrontendConfig::client_config())
        .token_store(token_store())
        .build()
}

/// Get the shared API client, creating it on the first call
pub fn api_client() -> Result<Rc<ApiClient>, ClientError> {
    API_CLIENT.with(|cell| {
        cell.get_or_try_init(|| build_client().map(Rc::new))
            .cloned()
    })
}

/// Shared handle to the API client, provided through context by the app root
#[derive(Clone, Debug)]
pub struct SharedClient(Rc<ApiClient>);

impl SharedClient {
    #[must_use]
    pub const fn new(client: Rc<ApiClient>) -> Self {
        Self(client)
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.0
    }
}

impl PartialEq for SharedClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Hook to get the shared API client from context
#[hook]
pub fn use_api_client() -> Option<SharedClient> {
    use_context::<SharedClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_client_uses_frontend_config() {
        let client = api_client().unwrap();
        assert_eq!(client.base_url(), FrontendConfig::API_BASE_URL);
        assert_eq!(
            client.timeout().as_millis(),
            u128::from(FrontendConfig::REQUEST_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_shared_client_is_built_once() {
        let first = api_client().unwrap();
        let second = api_client().unwrap();
        assert!(Rc::ptr_eq(&first, &second));

        // Every handle given out refers to the one instance
        assert_eq!(SharedClient::new(first), SharedClient::new(second));
        API_CLIENT.with(|cell| {
            assert!(Rc::ptr_eq(cell.get().unwrap(), &api_client().unwrap()));
        });
    }
}
