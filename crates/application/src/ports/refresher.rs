//! Token refresh port.

use alumnet_domain::CredentialPair;
use async_trait::async_trait;

use crate::error::ApiError;

/// Port for the network half of a token refresh.
///
/// Separated from [`crate::AuthSession`] so the at-most-one-refresh
/// invariant is provable in tests with a counting fake.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Exchanges a refresh token for a new credential pair.
    ///
    /// # Errors
    ///
    /// [`ApiError::Refresh`] when the endpoint rejects the token,
    /// [`ApiError::Network`] on transport failure. Either way the attempt is
    /// terminal: the session clears stored credentials and does not retry.
    async fn refresh(&self, refresh_token: &str) -> Result<CredentialPair, ApiError>;
}
