//! Alumni connection types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a connection between two alumni.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Requested, awaiting the recipient's answer.
    Pending,
    /// Both sides connected.
    Accepted,
    /// Recipient declined.
    Declined,
}

/// A connection edge between two users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection id.
    pub id: Uuid,
    /// User who sent the request.
    pub requester_id: Uuid,
    /// User who received it.
    pub recipient_id: Uuid,
    /// Current state.
    pub status: ConnectionStatus,
    /// When the request was made.
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// Returns the id of the other party, given one side of the edge.
    #[must_use]
    pub const fn other_party(&self, user_id: Uuid) -> Uuid {
        if self.requester_id.as_u128() == user_id.as_u128() {
            self.recipient_id
        } else {
            self.requester_id
        }
    }
}
