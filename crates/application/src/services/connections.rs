//! Connection operations.

use std::sync::Arc;

use alumnet_domain::request::ApiRequest;
use alumnet_domain::{Connection, Page, PageQuery};
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::ApiTransport;

/// Connection graph operations.
pub struct ConnectionsApi<T> {
    transport: Arc<T>,
}

impl<T: ApiTransport> ConnectionsApi<T> {
    /// Creates the service.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the caller's connections, pending ones included.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list(&self, query: &PageQuery) -> Result<Page<Connection>, ApiError> {
        let req = ApiRequest::get("/connections").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Sends a connection request to another user.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] with 409 when a connection already exists.
    pub async fn request(&self, recipient_id: Uuid) -> Result<Connection, ApiError> {
        let req = ApiRequest::post("/connections")
            .with_json(&serde_json::json!({ "recipient_id": recipient_id }))?;
        self.transport.execute(req).await?.json()
    }

    /// Accepts a pending request addressed to the caller.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn accept(&self, connection_id: Uuid) -> Result<Connection, ApiError> {
        let req = ApiRequest::post(format!("/connections/{connection_id}/accept"));
        self.transport.execute(req).await?.json()
    }

    /// Removes (or declines) a connection.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn remove(&self, connection_id: Uuid) -> Result<(), ApiError> {
        let req = ApiRequest::delete(format!("/connections/{connection_id}"));
        self.transport.execute(req).await?.json()
    }
}
