//! Credential storage port.

use alumnet_domain::{CredentialPair, UserProfile};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a credential store backend.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The stored document could not be read or written as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Port for persisting the credential pair and the cached profile.
///
/// The store is a plain key-value holder: it never validates token
/// contents. The profile is cached alongside the pair and cleared together
/// with it on logout, so a fresh process can render the session owner
/// without a network call.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the stored pair, if any.
    async fn load(&self) -> Result<Option<CredentialPair>, CredentialStoreError>;

    /// Overwrites the stored pair (login, refresh).
    async fn store(&self, pair: CredentialPair) -> Result<(), CredentialStoreError>;

    /// Loads the cached profile, if any.
    async fn load_profile(&self) -> Result<Option<UserProfile>, CredentialStoreError>;

    /// Caches the session owner's profile.
    async fn store_profile(&self, profile: &UserProfile) -> Result<(), CredentialStoreError>;

    /// Deletes the pair and the cached profile (logout, failed refresh).
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
