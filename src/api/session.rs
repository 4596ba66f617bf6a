//! Bearer-token session owned by an [`ApiClient`](super::ApiClient).

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::SecretString;
use tracing::debug;

use super::error::ApiError;
use super::store::TokenStore;

/// Route the hosting application should send the user to once a session is
/// invalidated.
pub const LOGIN_ROUTE: &str = "/login";

/// Notified when the server rejects the current token.
///
/// Replaces a hard redirect: the host decides what "go to login" means.
#[cfg_attr(test, mockall::automock)]
pub trait SessionObserver: Send + Sync {
    fn session_invalidated(&self, login_route: &str);
}

/// Observer that does nothing.
#[cfg(test)]
pub struct NoopObserver;

#[cfg(test)]
impl SessionObserver for NoopObserver {
    fn session_invalidated(&self, _login_route: &str) {}
}

/// The single active token, mirrored into a [`TokenStore`].
///
/// A token is either absent or trusted until the server says otherwise.
/// There is no expiry check and no refresh.
pub struct Session {
    token: RwLock<Option<SecretString>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            token: RwLock::new(None),
            store,
        }
    }

    /// Store the token in memory and in the durable store.
    pub fn set(&self, token: &str) -> Result<(), ApiError> {
        self.store.save(token)?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) =
            Some(SecretString::from(token));
        Ok(())
    }

    /// Forget the token in memory and in the durable store.
    ///
    /// The in-memory copy is dropped even if the store fails.
    pub fn clear(&self) -> Result<(), ApiError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.store.clear()?;
        Ok(())
    }

    /// Token to attach to the next request.
    ///
    /// Falls back to the durable store when nothing is held in memory, so a
    /// fresh process picks up a token saved by an earlier one.
    pub fn current(&self) -> Result<Option<SecretString>, ApiError> {
        if let Some(token) = self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Some(token.clone()));
        }

        let Some(stored) = self.store.load()? else {
            return Ok(None);
        };

        debug!("loaded auth token from store");
        let secret = SecretString::from(stored);
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(secret.clone());
        Ok(Some(secret))
    }

    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.current()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::store::MemoryTokenStore;
    use secrecy::ExposeSecret;

    fn held(session: &Session) -> Option<String> {
        session
            .current()
            .unwrap()
            .map(|t| t.expose_secret().to_string())
    }

    #[test]
    fn test_empty_session() {
        let session = Session::new(Arc::new(MemoryTokenStore::new()));
        assert!(session.current().unwrap().is_none());
        assert!(!session.is_authenticated().unwrap());
    }

    #[test]
    fn test_set_writes_through() {
        let store = Arc::new(MemoryTokenStore::new());
        let session = Session::new(store.clone());

        session.set("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));

        // Served from memory once set, even if the store loses it.
        store.clear().unwrap();
        assert_eq!(held(&session).as_deref(), Some("tok"));
    }

    #[test]
    fn test_lazy_load_from_store() {
        let store = Arc::new(MemoryTokenStore::with_token("persisted"));
        let session = Session::new(store.clone());

        assert_eq!(held(&session).as_deref(), Some("persisted"));
        store.clear().unwrap();
        assert_eq!(held(&session).as_deref(), Some("persisted"));
    }

    #[test]
    fn test_clear_is_seen_by_new_session() {
        let store = Arc::new(MemoryTokenStore::new());
        let session = Session::new(store.clone());
        session.set("tok").unwrap();
        session.clear().unwrap();

        let fresh = Session::new(store);
        assert!(fresh.current().unwrap().is_none());
    }
}
