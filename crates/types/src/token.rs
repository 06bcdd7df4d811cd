//! Bearer token representation and expiry logic.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Renewal margin: a token this close to expiry is treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// A short-lived bearer token with optional expiry tracking.
#[derive(Debug, Clone)]
pub struct BearerToken {
    pub access_token: String,
    /// Unix timestamp after which the token is no longer valid.
    pub expires_at: Option<u64>,
}

impl BearerToken {
    /// Create a token without expiry information.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Set the expiry to `expires_in_secs` seconds from now.
    #[must_use]
    pub fn with_expiry(mut self, expires_in_secs: u64) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        self.expires_at = Some(now + expires_in_secs);
        self
    }

    /// Return `true` if the token expires within the renewal margin.
    /// Tokens without expiry information never count as expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        now + EXPIRY_MARGIN_SECS >= expires_at
    }
}
