//! File-backed persistence.

mod credential_store;

pub use credential_store::FileCredentialStore;
