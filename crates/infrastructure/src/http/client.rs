//! The reqwest-backed request dispatcher.

use std::sync::Arc;
use std::time::Duration;

use alumnet_application::response::classify_failure;
use alumnet_application::{
    ApiError, ApiResponse, ApiTransport, AuthSession, Clock, CredentialStore, ProgressFn,
    TokenRefresher,
};
use alumnet_domain::request::{ApiRequest, HttpMethod, UploadForm};
use alumnet_domain::{DomainError, DomainResult};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::multipart::build_form;

/// Configuration for the portal client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Backend base URL, e.g. `https://api.alumnet.example`.
    pub base_url: Url,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Creates a configuration from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBaseUrl`] if the URL does not parse.
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {base_url}")))?;
        Ok(Self {
            base_url,
            user_agent: concat!("Alumnet/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The absolute URL for a path relative to the base.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        )
    }
}

/// The request dispatcher.
///
/// Attaches bearer tokens through the refresh coordinator, serializes JSON
/// and multipart bodies, classifies failures into [`ApiError`], and clears
/// stored credentials on a 401. Does not retry: after a refresh-triggering
/// failure the caller re-issues the request.
pub struct ApiClient<S, R, C> {
    http: Client,
    config: ApiClientConfig,
    session: Arc<AuthSession<S, R, C>>,
    store: Arc<S>,
}

impl<S, R, C> ApiClient<S, R, C>
where
    S: CredentialStore,
    R: TokenRefresher,
    C: Clock,
{
    /// Creates a dispatcher over the given session and store.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] if the underlying HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        session: Arc<AuthSession<S, R, C>>,
        store: Arc<S>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            config,
            session,
            store,
        })
    }

    /// GET a typed resource.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::get(path)).await?.json()
    }

    /// POST a JSON body, decoding a typed reply.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::post(path).with_json(body)?)
            .await?
            .json()
    }

    /// PUT a JSON body, decoding a typed reply.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::put(path).with_json(body)?)
            .await?
            .json()
    }

    /// DELETE a resource.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await?.json()
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Obtains a bearer token, or fails without touching the network.
    async fn bearer_token(&self, require_auth: bool) -> Result<Option<String>, ApiError> {
        if !require_auth {
            return Ok(None);
        }
        match self.session.access_token().await {
            Some(token) => Ok(Some(token)),
            None => Err(ApiError::Unauthenticated),
        }
    }

    fn map_transport_error(error: &reqwest::Error) -> ApiError {
        let message = if error.is_timeout() {
            format!("request timed out: {error}")
        } else if error.is_connect() {
            format!("connection failed: {error}")
        } else {
            error.to_string()
        };
        ApiError::Network { message }
    }

    /// Shared tail of every dispatch: classify the status, clear stored
    /// credentials on 401, hand back the raw 2xx body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<ApiResponse, ApiError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        if status.is_success() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: bytes.to_vec(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Safety net behind the refresh coordinator: a 401 that slipped
            // through means the stored credentials are no good.
            tracing::warn!("401 from backend, clearing stored credentials");
            if let Err(err) = self.store.clear().await {
                tracing::warn!(error = %err, "failed to clear credentials");
            }
        }

        Err(classify_failure(
            status.as_u16(),
            status.canonical_reason(),
            &bytes,
        ))
    }
}

#[async_trait]
impl<S, R, C> ApiTransport for ApiClient<S, R, C>
where
    S: CredentialStore,
    R: TokenRefresher,
    C: Clock,
{
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let token = self.bearer_token(request.require_auth).await?;

        let mut url = Url::parse(&self.config.endpoint(&request.path))
            .map_err(|e| DomainError::InvalidBaseUrl(e.to_string()))?;
        if let Some(query) = &request.query {
            url.set_query(Some(query));
        }

        tracing::debug!(method = request.method.as_str(), url = %url, "dispatching request");

        let mut builder = self
            .http
            .request(Self::to_reqwest_method(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        self.handle_response(response).await
    }

    async fn upload(
        &self,
        path: &str,
        form: UploadForm,
        progress: Option<ProgressFn>,
    ) -> Result<ApiResponse, ApiError> {
        let token = self.bearer_token(true).await?;

        let url = Url::parse(&self.config.endpoint(path))
            .map_err(|e| DomainError::InvalidBaseUrl(e.to_string()))?;

        tracing::debug!(url = %url, bytes = form.file_bytes(), "dispatching upload");

        // No manual content-type: reqwest writes the multipart boundary.
        let mut builder = self.http.post(url).multipart(build_form(form, progress)?);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        self.handle_response(response).await
    }
}
