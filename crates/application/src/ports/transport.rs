//! HTTP transport port.

use std::sync::Arc;

use alumnet_domain::request::{ApiRequest, UploadForm};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::response::decode_body;

/// Callback reporting upload progress as `(bytes_sent, total_bytes)`.
pub type ProgressFn = Arc<dyn Fn(u64, Option<u64>) + Send + Sync>;

/// A successful (2xx) response from the backend.
///
/// Non-2xx statuses never reach callers as a response; the transport
/// classifies them into [`ApiError`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code (2xx).
    pub status: u16,
    /// Raw response body; empty for 204.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decodes the body as JSON.
    ///
    /// A 204 or empty body decodes as JSON `null`, so unit and `Option`
    /// targets succeed instead of hitting a parse error.
    ///
    /// # Errors
    ///
    /// [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        decode_body(&self.body)
    }
}

/// Port for dispatching requests to the portal backend.
///
/// Implementations attach bearer tokens (via the refresh coordinator),
/// serialize bodies, classify failures into [`ApiError`], and clear stored
/// credentials on a 401. The endpoint services are generic over this trait,
/// which is what makes them testable without a server.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Dispatches a JSON request.
    ///
    /// # Errors
    ///
    /// See the [`ApiError`] taxonomy. `Unauthenticated` is returned without
    /// any network I/O when the request requires auth and no valid token is
    /// obtainable.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;

    /// Dispatches a multipart upload, reporting progress per chunk sent.
    ///
    /// The multipart content-type (with boundary) is set by the HTTP layer,
    /// never manually.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiTransport::execute`].
    async fn upload(
        &self,
        path: &str,
        form: UploadForm,
        progress: Option<ProgressFn>,
    ) -> Result<ApiResponse, ApiError>;
}
