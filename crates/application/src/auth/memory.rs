//! In-memory credential storage.

use alumnet_domain::{CredentialPair, UserProfile};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{CredentialStore, CredentialStoreError};

/// In-memory credential store.
///
/// Backs tests and embedders that do not want credentials on disk. Never
/// fails.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    pair: Option<CredentialPair>,
    profile: Option<UserProfile>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a credential pair.
    #[must_use]
    pub fn with_pair(pair: CredentialPair) -> Self {
        Self {
            inner: RwLock::new(Inner {
                pair: Some(pair),
                profile: None,
            }),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<CredentialPair>, CredentialStoreError> {
        Ok(self.inner.read().await.pair.clone())
    }

    async fn store(&self, pair: CredentialPair) -> Result<(), CredentialStoreError> {
        self.inner.write().await.pair = Some(pair);
        Ok(())
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, CredentialStoreError> {
        Ok(self.inner.read().await.profile.clone())
    }

    async fn store_profile(&self, profile: &UserProfile) -> Result<(), CredentialStoreError> {
        self.inner.write().await.profile = Some(profile.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        let mut inner = self.inner.write().await;
        inner.pair = None;
        inner.profile = None;
        Ok(())
    }
}
