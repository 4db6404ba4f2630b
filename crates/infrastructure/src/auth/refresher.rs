//! HTTP token refresh adapter.

use alumnet_application::{ApiError, TokenRefresher};
use alumnet_domain::CredentialPair;
use async_trait::async_trait;
use serde::Deserialize;

use crate::http::ApiClientConfig;

/// Response shape of the refresh endpoint.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    refresh_token: String,
}

/// Error body shape for refresh rejections.
#[derive(Debug, Deserialize)]
struct RefreshErrorBody {
    detail: String,
}

/// Calls `POST /auth/refresh` to exchange a refresh token for a new pair.
///
/// The request body is the refresh token itself as a JSON string. Uses its
/// own plain HTTP client: the refresher sits underneath the dispatcher's
/// auth handling and must never recurse into it.
pub struct HttpTokenRefresher {
    http: reqwest::Client,
    refresh_url: String,
}

impl HttpTokenRefresher {
    /// Creates a refresher for the configured backend.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ApiClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            refresh_url: config.endpoint("/auth/refresh"),
        })
    }
}

#[async_trait]
impl TokenRefresher for HttpTokenRefresher {
    async fn refresh(&self, refresh_token: &str) -> Result<CredentialPair, ApiError> {
        let response = self
            .http
            .post(&self.refresh_url)
            .json(&refresh_token)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<RefreshErrorBody>(&bytes)
                .map(|body| body.detail)
                .unwrap_or_else(|_| format!("refresh endpoint returned {status}"));
            return Err(ApiError::Refresh { message });
        }

        let reply: RefreshResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("refresh response: {e}")))?;

        Ok(CredentialPair::new(reply.access_token, reply.refresh_token))
    }
}
