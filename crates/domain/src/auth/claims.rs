//! Bearer-token claim decoding and expiry checks.
//!
//! Access tokens are JWTs, but the client never verifies signatures; it only
//! needs the embedded expiry claim to decide whether a refresh is due. The
//! payload segment is decoded as unpadded base64url JSON. Anything that does
//! not decode is treated as expired, which fails safe toward
//! re-authentication.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Safety margin subtracted from the expiry claim, in milliseconds.
///
/// A token within 30 seconds of expiry is refreshed eagerly so an in-flight
/// request does not race the backend's clock.
pub const EXPIRY_MARGIN_MS: i64 = 30_000;

/// Claims the client reads out of an access token payload.
///
/// Derived, never stored: recomputed per expiry check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry as unix seconds.
    pub exp: i64,
    /// Subject (user id), when present.
    #[serde(default)]
    pub sub: Option<String>,
}

impl TokenClaims {
    /// Decodes the claims from a bearer token string.
    ///
    /// Returns `None` if the token is not three dot-separated segments, the
    /// payload is not valid base64url, or the JSON lacks an `exp` claim.
    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Expiry instant in unix milliseconds.
    #[must_use]
    pub const fn expires_at_ms(&self) -> i64 {
        self.exp * 1000
    }
}

/// Reports whether a token is expired (or close enough to count) at `now_ms`.
///
/// Expired iff `now_ms >= exp * 1000 - EXPIRY_MARGIN_MS`. Malformed or
/// undecodable tokens report expired.
#[must_use]
pub fn is_expired(token: &str, now_ms: i64) -> bool {
    TokenClaims::decode(token)
        .is_none_or(|claims| now_ms >= claims.expires_at_ms() - EXPIRY_MARGIN_MS)
}
