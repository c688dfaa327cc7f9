//! The shared API client and its builder

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::interceptor::{BearerTokenInterceptor, RequestInterceptor};
use crate::store::TokenStore;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder, Method, Request, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("portal-client/", env!("CARGO_PKG_VERSION"));

/// API client that runs every request through its interceptors before
/// handing it to the transport
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClient {
    /// Create a client with the default configuration that authenticates
    /// from `store`
    pub fn with_token_store(store: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        Self::builder().token_store(store).build()
    }

    /// Create a new client builder
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Configuration the client was built with
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Get the request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Create a request builder for `path` relative to the base URL
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.url_for(path));

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(self.config.timeout());

        builder
    }

    /// Build the request and run it through the interceptors in order.
    ///
    /// This is exactly what [`send`](Self::send) transmits.
    pub fn prepare(&self, builder: RequestBuilder) -> Result<Request, ClientError> {
        let mut request = builder.build()?;
        for interceptor in &self.interceptors {
            request = interceptor.intercept(request)?;
        }
        Ok(request)
    }

    /// Intercept and transmit a request, returning the raw response
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let request = self.prepare(builder)?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            authorized = request.headers().contains_key(AUTHORIZATION),
            "Sending request"
        );

        Ok(self.client.execute(request).await?)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(builder).await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            // No content decodes as JSON `null`, i.e. `()` or `None`
            if status == StatusCode::NO_CONTENT || body.is_empty() {
                return Ok(serde_json::from_slice(b"null")?);
            }
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::DELETE, path)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClientBuilder {
    /// Start from an existing configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Append an interceptor; interceptors run in the order they were added
    #[must_use]
    pub fn interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Append a bearer token interceptor reading from `store`
    #[must_use]
    pub fn token_store(self, store: Arc<dyn TokenStore>) -> Self {
        self.interceptor(Arc::new(BearerTokenInterceptor::new(store)))
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let defaults = self.config.unwrap_or_default();
        let config = ClientConfig::new(
            self.base_url
                .unwrap_or_else(|| defaults.base_url().to_string()),
            self.timeout.unwrap_or_else(|| defaults.timeout()),
        );

        if config.base_url().is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }
        url::Url::parse(config.base_url()).map_err(|e| {
            ClientError::Configuration(format!("invalid base_url {}: {e}", config.base_url()))
        })?;

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(config.timeout())
            .build()?;

        // Timeouts not supported on WASM
        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().user_agent(user_agent).build()?;

        tracing::debug!(
            base_url = config.base_url(),
            timeout = ?config.timeout(),
            interceptors = self.interceptors.len(),
            "Built API client"
        );

        Ok(ApiClient {
            client,
            config,
            interceptors: self.interceptors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;

    #[test]
    fn test_builder_defaults() {
        let client = ApiClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_builder_rejects_relative_base_url() {
        let result = ApiClient::builder().base_url("/api").build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));

        let result = ApiClient::builder().base_url("").build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_config_unchanged_by_requests() {
        let client =
            ApiClient::with_token_store(Arc::new(MemoryTokenStore::with_token("t"))).unwrap();
        for path in ["/a", "/b?x=1", "/c/d"] {
            let request = client.prepare(client.request(Method::POST, path)).unwrap();
            assert!(request.url().as_str().starts_with("http://localhost:8080/api/"));
        }
        assert_eq!(client.config(), &ClientConfig::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_prepare_applies_timeout() {
        let client = ApiClient::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        let request = client.prepare(client.request(Method::GET, "/x")).unwrap();
        assert_eq!(request.timeout(), Some(&Duration::from_secs(3)));
    }

    #[test]
    fn test_interceptors_run_in_order() {
        use crate::error::InterceptError;
        use reqwest::header::HeaderValue;

        let client = ApiClient::builder()
            .interceptor(Arc::new(|mut req: Request| -> Result<Request, InterceptError> {
                req.headers_mut()
                    .insert("x-trace", HeaderValue::from_static("first"));
                Ok(req)
            }))
            .interceptor(Arc::new(|mut req: Request| -> Result<Request, InterceptError> {
                req.headers_mut()
                    .append("x-trace", HeaderValue::from_static("second"));
                Ok(req)
            }))
            .build()
            .unwrap();

        let request = client.prepare(client.request(Method::GET, "/")).unwrap();
        let values: Vec<_> = request
            .headers()
            .get_all("x-trace")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, ["first", "second"]);
    }
}
