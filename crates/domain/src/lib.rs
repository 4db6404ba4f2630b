//! Alumnet Domain - Core portal types
//!
//! This crate defines the domain model for the Alumnet alumni-network
//! client. All types here are pure Rust with no I/O dependencies.

pub mod admin;
pub mod auth;
pub mod connections;
pub mod error;
pub mod events;
pub mod feed;
pub mod fundraising;
pub mod geo;
pub mod id;
pub mod mentoring;
pub mod page;
pub mod profile;
pub mod request;

pub use admin::{ImportReport, ImportRowError, University};
pub use auth::{CredentialPair, EXPIRY_MARGIN_MS, TokenClaims, is_expired};
pub use connections::{Connection, ConnectionStatus};
pub use error::{DomainError, DomainResult};
pub use events::{Event, Rsvp, RsvpStatus};
pub use feed::{Comment, NewPost, Post};
pub use fundraising::{Campaign, Donation, NewDonation};
pub use geo::{GeoPoint, HeatBucket, geohash};
pub use id::new_id;
pub use mentoring::{MentorshipRequest, MentorshipStatus};
pub use page::{Page, PageQuery};
pub use profile::{UserProfile, UserRole};
pub use request::{ApiRequest, HttpMethod, UploadField, UploadForm};
