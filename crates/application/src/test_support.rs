//! Shared helpers for unit tests.

use std::sync::Mutex;

use alumnet_domain::request::{ApiRequest, UploadForm};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::ApiError;
use crate::ports::{ApiResponse, ApiTransport, ProgressFn};

/// Builds an unsigned bearer token expiring at `exp_secs` (unix seconds).
pub fn unsigned_token(exp_secs: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp_secs}}}"#).as_bytes());
    format!("{header}.{payload}.sig")
}

/// Transport fake: records requests, replays canned 2xx bodies in order.
#[derive(Default)]
pub struct StubTransport {
    requests: Mutex<Vec<ApiRequest>>,
    uploads: Mutex<Vec<(String, UploadForm)>>,
    replies: Mutex<Vec<ApiResponse>>,
}

impl StubTransport {
    /// Stub that answers every call with 204 and no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub that answers calls with the given JSON bodies, in order.
    pub fn replying(bodies: &[&str]) -> Self {
        let stub = Self::default();
        {
            #[allow(clippy::unwrap_used)]
            let mut replies = stub.replies.lock().unwrap();
            // Stored reversed so pop() yields submission order.
            for body in bodies.iter().rev() {
                replies.push(ApiResponse {
                    status: 200,
                    body: body.as_bytes().to_vec(),
                });
            }
        }
        stub
    }

    /// Requests seen so far.
    #[allow(clippy::unwrap_used)]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Uploads seen so far.
    #[allow(clippy::unwrap_used)]
    pub fn uploads(&self) -> Vec<(String, UploadForm)> {
        self.uploads.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    fn next_reply(&self) -> ApiResponse {
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(ApiResponse {
                status: 204,
                body: Vec::new(),
            })
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[allow(clippy::unwrap_used)]
        self.requests.lock().unwrap().push(request);
        Ok(self.next_reply())
    }

    async fn upload(
        &self,
        path: &str,
        form: UploadForm,
        progress: Option<ProgressFn>,
    ) -> Result<ApiResponse, ApiError> {
        if let Some(progress) = progress {
            let total = form.file_bytes();
            progress(total, Some(total));
        }
        #[allow(clippy::unwrap_used)]
        self.uploads.lock().unwrap().push((path.to_string(), form));
        Ok(self.next_reply())
    }
}
