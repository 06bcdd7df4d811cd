//! The MOT history client: URL resolution, header assembly, status routing.

use std::sync::Arc;

use mot_history_types::{
    ApiError, BulkDownload, HistoryError, HttpResponse, TokenProvider, Transport, VehicleHistory,
    traits::Result,
};
use serde_json::Value;

use crate::{endpoints, transport::ReqwestTransport};

/// Credentials for the trade API: an Azure AD application registration
/// plus the API key issued with it.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub api_key: String,
}

/// Typed client for the MOT History trade API.
///
/// Operations are independent: no shared mutable state, one token
/// acquisition (cached by the provider) and one GET per call. Safe to use
/// concurrently from multiple tasks.
pub struct MotHistoryClient {
    tokens: Arc<dyn TokenProvider>,
    transport: Arc<dyn Transport>,
    api_key: String,
    base_url: String,
}

impl MotHistoryClient {
    /// Build a client with the default reqwest transport and the
    /// client-credentials token provider.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let tokens = mot_history_auth::ClientCredentials::new(
            credentials.client_id.clone(),
            credentials.client_secret.clone(),
            &credentials.tenant_id,
        );
        Self::with_parts(
            Arc::new(tokens),
            Arc::new(ReqwestTransport::default()),
            credentials.api_key.clone(),
        )
    }

    /// Build a client from explicit collaborators.
    pub fn with_parts(
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn Transport>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            transport,
            api_key: api_key.into(),
            base_url: endpoints::BASE_URL.to_string(),
        }
    }

    /// Override the base URL (staging, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// MOT history for a vehicle, looked up by registration number.
    ///
    /// # Errors
    ///
    /// Any variant of [`HistoryError`]: token acquisition, transport,
    /// documented API errors, or classification failures.
    pub async fn vehicle_history_by_registration(
        &self,
        registration: &str,
    ) -> Result<VehicleHistory> {
        let url = endpoints::vehicle_by_registration(&self.base_url, registration);
        let body = self.get_json(&url).await?;
        mot_history_classify::classify_vehicle(&body)
    }

    /// MOT history for a vehicle, looked up by VIN.
    ///
    /// # Errors
    ///
    /// Any variant of [`HistoryError`]: token acquisition, transport,
    /// documented API errors, or classification failures.
    pub async fn vehicle_history_by_vin(&self, vin: &str) -> Result<VehicleHistory> {
        let url = endpoints::vehicle_by_vin(&self.base_url, vin);
        let body = self.get_json(&url).await?;
        mot_history_classify::classify_vehicle(&body)
    }

    /// List the bulk and delta history files currently available.
    ///
    /// # Errors
    ///
    /// Any variant of [`HistoryError`]: token acquisition, transport,
    /// documented API errors, or classification failures.
    pub async fn bulk_download(&self) -> Result<BulkDownload> {
        let url = endpoints::bulk_download(&self.base_url);
        let body = self.get_json(&url).await?;
        mot_history_classify::parse_bulk_download(&body)
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let token = self.tokens.bearer_token().await?;
        let headers = vec![
            ("Authorization".to_string(), format!("Bearer {token}")),
            ("X-API-Key".to_string(), self.api_key.clone()),
        ];
        tracing::debug!(%url, "issuing GET");
        let response = self.transport.get(url, &headers).await?;
        route_response(&response)
    }
}

/// Map a raw status + body onto the documented outcomes: 2xx bodies are
/// parsed and handed on, 400/404/500 become typed [`ApiError`] values, and
/// everything else is an unrecoverable transport fault.
fn route_response(response: &HttpResponse) -> Result<Value> {
    match response.status {
        200..=299 => Ok(serde_json::from_slice(&response.body)?),
        status @ (400 | 404 | 500) => Err(HistoryError::Api(parse_api_error(
            status,
            &response.body,
        ))),
        status => Err(HistoryError::Transport {
            status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        }),
    }
}

fn parse_api_error(status: u16, body: &[u8]) -> ApiError {
    let json: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string();
    let errors = json.get("errors").and_then(Value::as_array).map(|list| {
        list.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });
    ApiError {
        status,
        message,
        errors,
    }
}
