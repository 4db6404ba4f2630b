//! Typed endpoint services.
//!
//! One service per portal area, each a thin typed layer over the
//! [`crate::ApiTransport`] port. Services are generic over the transport
//! (static dispatch), which keeps them testable with an in-process stub.

mod admin;
mod auth;
mod connections;
mod events;
mod feed;
mod fundraising;
mod mentoring;

pub use admin::{AdminApi, NewUniversity};
pub use auth::{AuthApi, LoginRequest, RegisterRequest};
pub use connections::ConnectionsApi;
pub use events::EventsApi;
pub use feed::FeedApi;
pub use fundraising::FundraisingApi;
pub use mentoring::{MentoringApi, NewMentorshipRequest};
