//! Alumnet Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: the reqwest-based request dispatcher, the HTTP token
//! refresher, file-backed credential storage, and the system clock.

pub mod adapters;
pub mod auth;
pub mod http;
pub mod persistence;

pub use adapters::SystemClock;
pub use auth::HttpTokenRefresher;
pub use http::{ApiClient, ApiClientConfig};
pub use persistence::FileCredentialStore;
