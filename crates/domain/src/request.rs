//! API request description types.
//!
//! An [`ApiRequest`] is the transport-agnostic description of one call to
//! the portal backend: method, path relative to the configured base URL,
//! optional query string and JSON body, extra headers, and whether the call
//! needs a bearer token. The HTTP adapter turns it into a real request.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// HTTP methods the portal client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A transport-agnostic request to a backend endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Pre-encoded query string, without the leading `?`.
    pub query: Option<String>,
    /// JSON body, when present.
    pub body: Option<serde_json::Value>,
    /// Extra headers beyond the defaults.
    pub headers: Vec<(String, String)>,
    /// Whether the call must carry a bearer token. Defaults to true.
    pub require_auth: bool,
}

impl ApiRequest {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            headers: Vec::new(),
            require_auth: true,
        }
    }

    /// GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    /// DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if the value cannot be
    /// represented as JSON.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> DomainResult<Self> {
        self.body =
            Some(serde_json::to_value(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?);
        Ok(self)
    }

    /// Encodes and attaches query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuery`] if the parameters cannot be
    /// urlencoded.
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> DomainResult<Self> {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
        self.query = if encoded.is_empty() {
            None
        } else {
            Some(encoded)
        };
        Ok(self)
    }

    /// Adds an extra header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Marks the request as not needing authentication (login, register).
    #[must_use]
    pub const fn public(mut self) -> Self {
        self.require_auth = false;
        self
    }
}

/// A multipart upload payload (file uploads, bulk imports).
///
/// The HTTP adapter converts this into a multipart form and leaves the
/// content-type header to the HTTP layer so the boundary is set correctly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadForm {
    /// Form fields in submission order.
    pub fields: Vec<UploadField>,
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadField {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A file part.
    File {
        /// Field name.
        name: String,
        /// File name reported to the server.
        file_name: String,
        /// Explicit content type; guessed from the file name when `None`.
        content_type: Option<String>,
        /// File contents.
        bytes: Vec<u8>,
    },
}

impl UploadForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(UploadField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a file field; content type is guessed from the file name.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push(UploadField::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: None,
            bytes,
        });
        self
    }

    /// Total number of file bytes in the form, used for upload progress.
    #[must_use]
    pub fn file_bytes(&self) -> u64 {
        self.fields
            .iter()
            .map(|f| match f {
                UploadField::File { bytes, .. } => u64::try_from(bytes.len()).unwrap_or(u64::MAX),
                UploadField::Text { .. } => 0,
            })
            .sum()
    }
}
