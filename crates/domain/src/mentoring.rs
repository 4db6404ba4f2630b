//! Mentoring types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a mentorship request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorshipStatus {
    /// Sent, awaiting the mentor's answer.
    Pending,
    /// Mentor accepted; mentorship in progress.
    Accepted,
    /// Mentor declined.
    Declined,
    /// Mentorship wrapped up.
    Completed,
}

impl MentorshipStatus {
    /// Returns true while the request still needs an answer.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A mentorship request from a mentee to a mentor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorshipRequest {
    /// Request id.
    pub id: Uuid,
    /// User asking for mentoring.
    pub mentee_id: Uuid,
    /// User asked to mentor.
    pub mentor_id: Uuid,
    /// What the mentee wants help with.
    pub topic: String,
    /// Free-form intro message.
    #[serde(default)]
    pub message: Option<String>,
    /// Current state.
    pub status: MentorshipStatus,
    /// When the request was made.
    pub created_at: DateTime<Utc>,
}
