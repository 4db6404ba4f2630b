//! Authentication domain types.
//!
//! This module provides:
//! - The stored access/refresh credential pair
//! - Bearer-token claim decoding and expiry checks

mod claims;
mod credentials;

pub use claims::{EXPIRY_MARGIN_MS, TokenClaims, is_expired};
pub use credentials::CredentialPair;
