//! File-based credential storage.
//!
//! Credentials live in a single JSON document with fixed keys for the
//! access token, refresh token, and cached profile, the three values the
//! portal session owns. They are overwritten together on login/refresh and
//! cleared together on logout.

use std::path::{Path, PathBuf};

use alumnet_application::{CredentialStore, CredentialStoreError};
use alumnet_domain::{CredentialPair, UserProfile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// On-disk document shape.
///
/// ```json
/// {
///   "schema_version": 1,
///   "access_token": "eyJ...",
///   "refresh_token": "b32c...",
///   "profile": { "id": "...", "email": "..." }
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialDocument {
    schema_version: u32,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    profile: Option<UserProfile>,
}

const SCHEMA_VERSION: u32 = 1;

/// File-based credential store.
///
/// This file should be readable only by the owning user; it is created
/// under the user's configuration directory by default.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Login writes the pair then the profile; the lock keeps the two-step
    // read-modify-write sequences from interleaving.
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Creates a store at the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The default credentials path: `<config-dir>/alumnet/credentials.json`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("alumnet").join("credentials.json"))
    }

    /// The file path this store writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<CredentialDocument, CredentialStoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| CredentialStoreError::Serialization(e.to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(CredentialDocument::default())
            }
            Err(err) => Err(CredentialStoreError::Io(err.to_string())),
        }
    }

    async fn write_document(
        &self,
        document: &CredentialDocument,
    ) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        }

        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| CredentialStoreError::Serialization(e.to_string()))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| CredentialStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<CredentialPair>, CredentialStoreError> {
        let document = self.read_document().await?;
        Ok(
            match (document.access_token, document.refresh_token) {
                (Some(access), Some(refresh)) => Some(CredentialPair::new(access, refresh)),
                _ => None,
            },
        )
    }

    async fn store(&self, pair: CredentialPair) -> Result<(), CredentialStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.schema_version = SCHEMA_VERSION;
        document.access_token = Some(pair.access_token);
        document.refresh_token = Some(pair.refresh_token);
        self.write_document(&document).await
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, CredentialStoreError> {
        Ok(self.read_document().await?.profile)
    }

    async fn store_profile(&self, profile: &UserProfile) -> Result<(), CredentialStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.schema_version = SCHEMA_VERSION;
        document.profile = Some(profile.clone());
        self.write_document(&document).await
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_document(&CredentialDocument {
            schema_version: SCHEMA_VERSION,
            ..CredentialDocument::default()
        })
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileCredentialStore {
        FileCredentialStore::new(dir.path().join("credentials.json"))
    }

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "id": "0188d6a0-0000-7000-8000-000000000001",
            "email": "grad@example.edu",
            "full_name": "Grad User",
            "university_id": "0188d6a0-0000-7000-8000-000000000002",
            "created_at": "2024-01-01T00:00:00Z",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().await.unwrap().is_none());
        assert!(store.load_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pair_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .store(CredentialPair::new("access-1", "refresh-1"))
            .await
            .unwrap();

        let pair = store.load().await.unwrap().unwrap();
        assert_eq!(pair.access_token, "access-1");
        assert_eq!(pair.refresh_token, "refresh-1");
    }

    #[tokio::test]
    async fn test_storing_pair_preserves_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.store_profile(&profile()).await.unwrap();
        store
            .store(CredentialPair::new("access-2", "refresh-2"))
            .await
            .unwrap();

        // A refresh must not lose the cached profile.
        assert!(store.load_profile().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .store(CredentialPair::new("access-1", "refresh-1"))
            .await
            .unwrap();
        store.store_profile(&profile()).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        assert!(store.load_profile().await.unwrap().is_none());

        // File still parses after clearing.
        let document = store.read_document().await.unwrap();
        assert_eq!(document.schema_version, SCHEMA_VERSION);
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), b"not json").await.unwrap();

        assert!(matches!(
            store.load().await,
            Err(CredentialStoreError::Serialization(_))
        ));
    }
}
