//! Feed and post types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post in the alumni feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post id.
    pub id: Uuid,
    /// Author user id.
    pub author_id: Uuid,
    /// Author display name, denormalized for feed rendering.
    pub author_name: String,
    /// Post body (plain text).
    pub body: String,
    /// Number of likes.
    #[serde(default)]
    pub like_count: u32,
    /// Number of comments.
    #[serde(default)]
    pub comment_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post body.
    pub body: String,
}

impl NewPost {
    /// Creates a new post payload.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id.
    pub id: Uuid,
    /// Post this comment belongs to.
    pub post_id: Uuid,
    /// Author user id.
    pub author_id: Uuid,
    /// Author display name.
    pub author_name: String,
    /// Comment body.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
