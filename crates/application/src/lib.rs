//! Alumnet Application - Ports and client logic
//!
//! This crate holds the token lifecycle (expiry-driven single-flight
//! refresh), the typed endpoint services, and the ports the infrastructure
//! layer implements: credential storage, the refresh call, the HTTP
//! transport, and the clock.

pub mod auth;
pub mod error;
pub mod ports;
pub mod response;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthSession, MemoryCredentialStore, SessionStatus};
pub use error::ApiError;
pub use ports::{
    ApiResponse, ApiTransport, Clock, CredentialStore, CredentialStoreError, ProgressFn,
    TokenRefresher,
};
pub use services::{
    AdminApi, AuthApi, ConnectionsApi, EventsApi, FeedApi, FundraisingApi, LoginRequest,
    MentoringApi, NewMentorshipRequest, NewUniversity, RegisterRequest,
};
