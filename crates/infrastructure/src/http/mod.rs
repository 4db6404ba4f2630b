//! HTTP dispatch.
//!
//! The consolidated request dispatcher: one parameterized client instead of
//! the several divergent fetch wrappers the portal grew historically.

mod client;
mod multipart;

pub use client::{ApiClient, ApiClientConfig};
