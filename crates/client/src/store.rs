//! Credential stores the bearer interceptor reads from

use crate::error::StoreError;
use std::sync::RwLock;

/// Read-only view of wherever the login flow keeps the current token.
///
/// Implementations are consulted on every outgoing request, so they must
/// not cache: a token written or removed between two requests has to be
/// visible to the second one.
pub trait TokenStore: Send + Sync {
    /// Current token, `None` when nobody is signed in
    fn token(&self) -> Result<Option<String>, StoreError>;
}

impl<F> TokenStore for F
where
    F: Fn() -> Result<Option<String>, StoreError> + Send + Sync,
{
    fn token(&self) -> Result<Option<String>, StoreError> {
        self()
    }
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replace the stored token
    pub fn set(&self, token: impl Into<String>) -> Result<(), StoreError> {
        *self.write()? = Some(token.into());
        Ok(())
    }

    /// Remove the stored token
    pub fn clear(&self) -> Result<(), StoreError> {
        *self.write()? = None;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Option<String>>, StoreError> {
        self.token
            .write()
            .map_err(|_| StoreError::Access("token lock poisoned".into()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        self.token
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| StoreError::Access("token lock poisoned".into()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::TokenStore;
    use crate::config::TOKEN_STORAGE_KEY;
    use crate::error::StoreError;

    /// Token store backed by the browser's `localStorage`
    #[derive(Debug, Clone)]
    pub struct LocalStorageTokenStore {
        key: String,
    }

    impl LocalStorageTokenStore {
        /// Read the token from a custom key
        #[must_use]
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }

        /// Storage key being read
        #[must_use]
        pub fn key(&self) -> &str {
            &self.key
        }
    }

    impl Default for LocalStorageTokenStore {
        fn default() -> Self {
            Self::new(TOKEN_STORAGE_KEY)
        }
    }

    impl TokenStore for LocalStorageTokenStore {
        fn token(&self) -> Result<Option<String>, StoreError> {
            let window = web_sys::window()
                .ok_or_else(|| StoreError::Unavailable("no window object".into()))?;
            // Access can throw, e.g. when storage is disabled for the origin
            let storage = window
                .local_storage()
                .map_err(|e| StoreError::Access(format!("{e:?}")))?
                .ok_or_else(|| StoreError::Unavailable("localStorage is not available".into()))?;
            storage
                .get_item(&self.key)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_clear() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token().unwrap(), None);

        store.set("abc123").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert_eq!(store.token().unwrap(), None);
    }

    #[test]
    fn test_closure_store() {
        let store = || -> Result<Option<String>, StoreError> { Ok(Some("from-closure".to_string())) };
        assert_eq!(store.token().unwrap().as_deref(), Some("from-closure"));

        let failing =
            || -> Result<Option<String>, StoreError> { Err(StoreError::Unavailable("gone".into())) };
        assert!(failing.token().is_err());
    }
}
