use serde::{Deserialize, Serialize};

/// Payload of the access token issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user id or username
    #[serde(default)]
    pub username: Option<String>,
    pub exp: i64, // expiration timestamp, seconds
    #[serde(default)]
    pub iat: Option<i64>, // issued at
}

impl TokenClaims {
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }
}
