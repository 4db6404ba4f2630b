//! Login, registration, and logout.

use std::sync::Arc;

use alumnet_domain::request::ApiRequest;
use alumnet_domain::{CredentialPair, UserProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::{ApiTransport, CredentialStore};

/// Login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Tenant to register under.
    pub university_id: Uuid,
    /// Graduation year, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
}

/// Token-issuing response shared by login and register.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    refresh_token: String,
    user: UserProfile,
}

/// Authentication operations.
///
/// Login and register persist the issued pair and the profile through the
/// credential store; logout clears both. No navigation side effects: on a
/// 401 elsewhere the caller decides what to do.
pub struct AuthApi<T, S> {
    transport: Arc<T>,
    store: Arc<S>,
}

impl<T, S> AuthApi<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    /// Creates the service.
    pub const fn new(transport: Arc<T>, store: Arc<S>) -> Self {
        Self { transport, store }
    }

    /// Logs in and persists the issued credentials and profile.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] with status 401 on bad credentials; storage
    /// errors if the issued pair cannot be persisted.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserProfile, ApiError> {
        let req = ApiRequest::post("/auth/login").with_json(request)?.public();
        let response: AuthResponse = self.transport.execute(req).await?.json()?;
        self.persist(response).await
    }

    /// Registers a new account and persists the issued credentials.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on validation failure (409 for duplicate email).
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        let req = ApiRequest::post("/auth/register")
            .with_json(request)?
            .public();
        let response: AuthResponse = self.transport.execute(req).await?.json()?;
        self.persist(response).await
    }

    /// Clears stored credentials and the cached profile.
    ///
    /// Purely client-side; the backend keeps no session to revoke.
    ///
    /// # Errors
    ///
    /// Storage errors only.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.store.clear().await?;
        tracing::info!("logged out, credentials cleared");
        Ok(())
    }

    /// The cached profile from the last login, if any.
    ///
    /// # Errors
    ///
    /// Storage errors only.
    pub async fn cached_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        Ok(self.store.load_profile().await?)
    }

    async fn persist(&self, response: AuthResponse) -> Result<UserProfile, ApiError> {
        self.store
            .store(CredentialPair::new(
                response.access_token,
                response.refresh_token,
            ))
            .await?;
        self.store.store_profile(&response.user).await?;
        Ok(response.user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alumnet_domain::request::HttpMethod;

    use super::*;
    use crate::MemoryCredentialStore;
    use crate::test_support::StubTransport;

    fn auth_body() -> String {
        serde_json::json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "user": {
                "id": "0188d6a0-0000-7000-8000-000000000001",
                "email": "grad@example.edu",
                "full_name": "Grad User",
                "university_id": "0188d6a0-0000-7000-8000-000000000002",
                "created_at": "2024-01-01T00:00:00Z",
            },
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_login_is_public_and_persists_credentials() {
        let transport = Arc::new(StubTransport::replying(&[&auth_body()]));
        let store = Arc::new(MemoryCredentialStore::new());
        let api = AuthApi::new(Arc::clone(&transport), Arc::clone(&store));

        let profile = api
            .login(&LoginRequest {
                email: "grad@example.edu".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(profile.email, "grad@example.edu");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "/auth/login");
        // Login must not require a token.
        assert!(!requests[0].require_auth);
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "email": "grad@example.edu",
                "password": "hunter2",
            }))
        );

        let pair = store.load().await.unwrap().unwrap();
        assert_eq!(pair.access_token, "access-1");
        assert_eq!(pair.refresh_token, "refresh-1");
        assert!(store.load_profile().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let transport = Arc::new(StubTransport::replying(&[&auth_body()]));
        let store = Arc::new(MemoryCredentialStore::new());
        let api = AuthApi::new(transport, Arc::clone(&store));

        api.login(&LoginRequest {
            email: "grad@example.edu".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

        api.logout().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        assert!(api.cached_profile().await.unwrap().is_none());
    }
}
