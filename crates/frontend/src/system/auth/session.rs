use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use contracts::system::auth::TokenClaims;

use super::storage;

/// Where the access token lives. The browser uses localStorage; tests and
/// embedders can supply their own store.
pub trait SessionStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn clear(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn access_token(&self) -> Option<String> {
        storage::get_access_token()
    }

    fn clear(&self) {
        storage::clear_storage();
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn clear(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
    }
}

/// Decode the claims segment of a JWT-shaped token without checking the
/// signature; the backend remains the authority on validity.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn is_token_valid(token: &str, now_secs: i64) -> bool {
    decode_claims(token)
        .map(|claims| !claims.is_expired_at(now_secs))
        .unwrap_or(false)
}

/// Session handle passed down to widgets instead of reading global storage
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.access_token()
    }

    /// `true` when a non-expired token is present. Otherwise the store is
    /// cleared and `false` is returned.
    pub fn verify_at(&self, now_secs: i64) -> bool {
        let valid = self
            .store
            .access_token()
            .map(|token| is_token_valid(&token, now_secs))
            .unwrap_or(false);
        if !valid {
            self.store.clear();
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(
            r#"{{"sub":"1","username":"admin","exp":{},"iat":0}}"#,
            exp
        ));
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_decode_claims() {
        let claims = decode_claims(&token_with_exp(2_000)).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.username.as_deref(), Some("admin"));
        assert_eq!(claims.exp, 2_000);

        assert!(decode_claims("not-a-token").is_none());
        assert!(decode_claims("a.%%%.c").is_none());
    }

    #[test]
    fn test_valid_session_kept() {
        let store = Arc::new(MemorySession::with_token(token_with_exp(2_000)));
        let session = Session::new(store.clone());

        assert!(session.verify_at(1_000));
        assert!(store.access_token().is_some());
    }

    #[test]
    fn test_expired_session_cleared() {
        let store = Arc::new(MemorySession::with_token(token_with_exp(2_000)));
        let session = Session::new(store.clone());

        assert!(!session.verify_at(3_000));
        assert_eq!(store.access_token(), None);
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn test_missing_or_garbage_token_rejected() {
        let session = Session::new(Arc::new(MemorySession::default()));
        assert!(!session.verify_at(0));

        let store = Arc::new(MemorySession::with_token("garbage"));
        let session = Session::new(store.clone());
        assert!(!session.verify_at(0));
        assert_eq!(store.access_token(), None);
    }
}
