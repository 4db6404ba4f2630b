//! Client-facing error taxonomy.

use alumnet_domain::DomainError;
use thiserror::Error;

use crate::ports::CredentialStoreError;

/// Errors surfaced to callers of the portal client.
///
/// Every failure carries enough to render a message and branch on the HTTP
/// status. The dispatcher never swallows a failure; the only side effect on
/// an error path is clearing stored credentials on a 401.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid token could be obtained before the call. Synthetic: the
    /// request never reached the network.
    #[error("not authenticated")]
    Unauthenticated,

    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("network error: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },

    /// Non-2xx response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Best-effort message from the error body or status line.
        message: String,
    },

    /// The refresh endpoint rejected or errored. Terminal for the attempt:
    /// credentials are cleared and the caller must log in again.
    #[error("token refresh failed: {message}")]
    Refresh {
        /// Why the refresh failed.
        message: String,
    },

    /// Credential storage failed.
    #[error("credential storage error: {0}")]
    Storage(#[from] CredentialStoreError),

    /// A response body could not be decoded as the expected type.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Invalid request construction (bad base URL, body, or query).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// The HTTP status associated with this error.
    ///
    /// Synthetic authentication failures report 401 without a network round
    /// trip; transport failures report 0.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unauthenticated | Self::Refresh { .. } => 401,
            Self::Http { status, .. } => *status,
            Self::Network { .. } | Self::Storage(_) | Self::Decode(_) | Self::Domain(_) => 0,
        }
    }

    /// Returns true if the caller should send the user back to login.
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        self.status() == 401
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Unauthenticated.status(), 401);
        assert_eq!(
            ApiError::Network {
                message: "dns".to_string()
            }
            .status(),
            0
        );
        assert_eq!(
            ApiError::Http {
                status: 404,
                message: "not found".to_string()
            }
            .status(),
            404
        );
    }

    #[test]
    fn test_auth_errors_flagged() {
        assert!(ApiError::Unauthenticated.is_auth_error());
        assert!(
            ApiError::Http {
                status: 401,
                message: "expired".to_string()
            }
            .is_auth_error()
        );
        assert!(
            !ApiError::Http {
                status: 500,
                message: "boom".to_string()
            }
            .is_auth_error()
        );
    }
}
