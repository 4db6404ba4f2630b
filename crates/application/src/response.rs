//! Response classification and decoding.
//!
//! The pure half of the request dispatcher: turning a status code and body
//! bytes into a typed value or a typed error. Kept free of HTTP types so
//! the rules are unit-testable.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Decodes a response body as JSON.
///
/// An empty body (204, or 200 with nothing) decodes as JSON `null` so `()`
/// and `Option<T>` targets succeed.
///
/// # Errors
///
/// [`ApiError::Decode`] when the bytes do not parse as `T`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let bytes = if body.is_empty() { b"null" } else { body };
    serde_json::from_slice(bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Classifies a non-2xx response into [`ApiError::Http`].
///
/// Prefers the backend's `{"detail": "..."}` message, falls back to the
/// status reason phrase, then to the bare status code.
#[must_use]
pub fn classify_failure(status: u16, reason: Option<&str>, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.detail)
        .ok()
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));

    ApiError::Http { status, message }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_typed_body() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Reply {
            ok: bool,
        }
        let reply: Reply = decode_body(br#"{"ok":true}"#).unwrap();
        assert_eq!(reply, Reply { ok: true });
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        let () = decode_body(b"").unwrap();
        let nothing: Option<u32> = decode_body(b"").unwrap();
        assert_eq!(nothing, None);
    }

    #[test]
    fn test_mismatched_body_is_decode_error() {
        let result: Result<u32, ApiError> = decode_body(b"\"text\"");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_classify_prefers_detail_body() {
        let err = classify_failure(403, Some("Forbidden"), br#"{"detail":"admins only"}"#);
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "admins only");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_falls_back_to_reason() {
        let err = classify_failure(502, Some("Bad Gateway"), b"<html>oops</html>");
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_falls_back_to_status() {
        let err = classify_failure(599, None, b"");
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 599);
                assert_eq!(message, "HTTP 599");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }
}
