//! Token lifecycle management.
//!
//! This module provides:
//! - The refresh coordinator ([`AuthSession`]): expiry-driven, single-flight
//! - An in-memory credential store for tests and embedders

mod memory;
mod session;

pub use memory::MemoryCredentialStore;
pub use session::{AuthSession, SessionStatus};
