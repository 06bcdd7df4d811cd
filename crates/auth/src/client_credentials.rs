//! Client-credentials flow against the Microsoft identity platform.

use async_trait::async_trait;
use mot_history_types::{BearerToken, HistoryError, TokenProvider, traits::Result};
use tokio::sync::RwLock;

/// Default OAuth scope for the trade API.
pub const DEFAULT_SCOPE: &str = "https://tapi.dvsa.gov.uk/.default";

/// Microsoft identity platform authority.
pub const AUTHORITY_BASE: &str = "https://login.microsoftonline.com";

/// Token endpoint for a tenant.
#[must_use]
pub fn token_url(tenant_id: &str) -> String {
    format!("{AUTHORITY_BASE}/{tenant_id}/oauth2/v2.0/token")
}

/// Form parameters for the client-credentials grant.
#[must_use]
pub fn token_form_params<'a>(
    client_id: &'a str,
    client_secret: &'a str,
    scope: &'a str,
) -> [(&'static str, &'a str); 4] {
    [
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("scope", scope),
    ]
}

/// Parse the token endpoint JSON response into a [`BearerToken`].
///
/// # Errors
///
/// Returns [`HistoryError::Auth`] if the response is missing the
/// `access_token` field.
pub fn parse_token_response(json: &serde_json::Value) -> Result<BearerToken> {
    let access_token = json
        .get("access_token")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| HistoryError::Auth("missing access_token in token response".into()))?
        .to_string();

    let mut token = BearerToken::new(access_token);
    if let Some(expires_in) = json.get("expires_in").and_then(serde_json::Value::as_u64) {
        token = token.with_expiry(expires_in);
    }
    Ok(token)
}

/// Caching client-credentials token provider.
pub struct ClientCredentials {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    scope: String,
    cached: RwLock<Option<BearerToken>>,
}

impl ClientCredentials {
    /// Create a provider for the given tenant with the default scope.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant_id: &str,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_url: token_url(tenant_id),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: DEFAULT_SCOPE.to_string(),
            cached: RwLock::new(None),
        }
    }

    /// Override the OAuth scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Override the token endpoint URL (sovereign clouds, tests).
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    async fn fetch_token(&self) -> Result<BearerToken> {
        tracing::debug!(url = %self.token_url, "requesting bearer token");
        let params = token_form_params(&self.client_id, &self.client_secret, &self.scope);
        let resp = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| HistoryError::Auth(format!("token request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HistoryError::Auth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| HistoryError::Auth(format!("failed to parse token response: {e}")))?;
        parse_token_response(&json)
    }
}

#[async_trait]
impl TokenProvider for ClientCredentials {
    async fn bearer_token(&self) -> Result<String> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let token = self.fetch_token().await?;
        let access_token = token.access_token.clone();
        *self.cached.write().await = Some(token);
        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider_with_cache(token: Option<BearerToken>) -> ClientCredentials {
        ClientCredentials {
            http: reqwest::Client::new(),
            // unroutable on purpose: any fetch attempt must fail fast
            token_url: "http://127.0.0.1:1/token".to_string(),
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            cached: RwLock::new(token),
        }
    }

    #[test]
    fn test_token_url_format() {
        assert_eq!(
            token_url("my-tenant"),
            "https://login.microsoftonline.com/my-tenant/oauth2/v2.0/token"
        );
    }

    #[test]
    fn test_form_params() {
        let params = token_form_params("id", "secret", DEFAULT_SCOPE);
        assert_eq!(params[0], ("grant_type", "client_credentials"));
        assert_eq!(params[1], ("client_id", "id"));
        assert_eq!(params[2], ("client_secret", "secret"));
        assert_eq!(params[3], ("scope", "https://tapi.dvsa.gov.uk/.default"));
    }

    #[test]
    fn test_parse_token_response_full() {
        let resp = json!({"access_token": "at123", "expires_in": 3600, "token_type": "Bearer"});
        let token = parse_token_response(&resp).unwrap();
        assert_eq!(token.access_token, "at123");
        assert!(token.expires_at.is_some());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_parse_token_response_missing_access_token() {
        let err = parse_token_response(&json!({"expires_in": 3600})).unwrap_err();
        assert!(matches!(err, HistoryError::Auth(_)));
    }

    #[tokio::test]
    async fn test_cached_valid_token_skips_network() {
        let p = provider_with_cache(Some(BearerToken::new("cached").with_expiry(3600)));
        let token = p.bearer_token().await.unwrap();
        assert_eq!(token, "cached");
    }

    #[tokio::test]
    async fn test_expired_cached_token_triggers_refetch() {
        let p = provider_with_cache(Some(BearerToken::new("stale").with_expiry(0)));
        let err = p.bearer_token().await.unwrap_err();
        assert!(matches!(err, HistoryError::Auth(_)));
    }

    #[tokio::test]
    async fn test_empty_cache_fetch_failure_is_auth_error() {
        let p = provider_with_cache(None);
        let err = p.bearer_token().await.unwrap_err();
        assert!(matches!(err, HistoryError::Auth(_)));
    }
}
