//! Outbound request interceptors

use crate::error::InterceptError;
use crate::store::TokenStore;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::sync::Arc;

/// Hook run on every request after it is built and before it is sent.
///
/// Returning an error aborts the request; the caller sees it as a failed
/// call and nothing goes over the wire.
pub trait RequestInterceptor: Send + Sync {
    /// Inspect or rewrite `request`, handing back the one to send
    fn intercept(&self, request: Request) -> Result<Request, InterceptError>;
}

impl<F> RequestInterceptor for F
where
    F: Fn(Request) -> Result<Request, InterceptError> + Send + Sync,
{
    fn intercept(&self, request: Request) -> Result<Request, InterceptError> {
        self(request)
    }
}

/// Sets `Authorization: Bearer <token>` whenever the store holds a token
#[derive(Clone)]
pub struct BearerTokenInterceptor {
    store: Arc<dyn TokenStore>,
}

impl BearerTokenInterceptor {
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerTokenInterceptor {
    fn intercept(&self, mut request: Request) -> Result<Request, InterceptError> {
        let Some(token) = self.store.token()?.filter(|t| !t.is_empty()) else {
            return Ok(request);
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| InterceptError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);

        Ok(request)
    }
}

impl std::fmt::Debug for BearerTokenInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenInterceptor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryTokenStore;
    use reqwest::{Method, Url};

    fn request() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://localhost:8080/api/users").unwrap(),
        )
    }

    #[test]
    fn test_sets_bearer_header() {
        let interceptor =
            BearerTokenInterceptor::new(Arc::new(MemoryTokenStore::with_token("abc123")));
        let request = interceptor.intercept(request()).unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc123");
    }

    #[test]
    fn test_absent_token_leaves_headers_alone() {
        let interceptor = BearerTokenInterceptor::new(Arc::new(MemoryTokenStore::new()));
        let request = interceptor.intercept(request()).unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_empty_token_is_treated_as_absent() {
        let interceptor =
            BearerTokenInterceptor::new(Arc::new(MemoryTokenStore::with_token("")));
        let request = interceptor.intercept(request()).unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_replaces_existing_authorization() {
        let interceptor =
            BearerTokenInterceptor::new(Arc::new(MemoryTokenStore::with_token("fresh")));
        let mut req = request();
        req.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));
        let req = interceptor.intercept(req).unwrap();
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer fresh");
        assert_eq!(req.headers().get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_store_failure_propagates() {
        let store = || -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        };
        let interceptor = BearerTokenInterceptor::new(Arc::new(store));
        let err = interceptor.intercept(request()).unwrap_err();
        assert!(matches!(err, InterceptError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_unencodable_token_is_an_error() {
        let interceptor =
            BearerTokenInterceptor::new(Arc::new(MemoryTokenStore::with_token("bad\ntoken")));
        let err = interceptor.intercept(request()).unwrap_err();
        assert!(matches!(err, InterceptError::InvalidHeader(_)));
    }
}
