use std::time::Duration;

use serde::Deserialize;
use tokio::time::Instant;

/// OAuth2 client-credentials token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
}

/// A bearer token usable until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: Instant,
}

impl CachedToken {
    pub fn from_response(response: TokenResponse, issued_at: Instant) -> Self {
        Self {
            access_token: response.access_token,
            expires_at: issued_at + Duration::from_secs(response.expires_in),
        }
    }

    pub fn is_valid_at(&self, now: Instant) -> bool {
        !self.access_token.is_empty() && now < self.expires_at
    }
}
