//! Stored credential pair.

use serde::{Deserialize, Serialize};

/// The access/refresh token pair issued by the portal backend.
///
/// Owned exclusively by the credential store: overwritten on login and
/// refresh, deleted on logout or an irrecoverable 401. The tokens are
/// opaque strings here; expiry inspection lives in [`super::TokenClaims`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Short-lived bearer credential sent with each authenticated request.
    pub access_token: String,
    /// Longer-lived credential used to obtain a new access token.
    pub refresh_token: String,
}

impl CredentialPair {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Returns the `Authorization` header value for the access token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
