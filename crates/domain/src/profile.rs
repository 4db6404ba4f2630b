//! User profile types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular alumni member.
    #[default]
    Alumni,
    /// University (tenant) administrator.
    Admin,
    /// Cross-tenant superadmin.
    Superadmin,
}

/// A user profile as returned by the backend.
///
/// Cached alongside the credential pair after login and cleared with it on
/// logout, so the client can render the session owner without a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend-assigned user id.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Tenant the user belongs to.
    pub university_id: Uuid,
    /// Portal role.
    #[serde(default)]
    pub role: UserRole,
    /// Graduation year, when provided.
    #[serde(default)]
    pub graduation_year: Option<u16>,
    /// One-line headline shown on the profile card.
    #[serde(default)]
    pub headline: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Returns true if the user can reach the tenant admin back-office.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Superadmin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        let json = serde_json::to_string(&UserRole::Superadmin).unwrap();
        assert_eq!(json, r#""superadmin""#);
        let role: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(role, UserRole::Superadmin);
    }

    #[test]
    fn test_is_admin() {
        let mut profile: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "0188d6a0-0000-7000-8000-000000000001",
            "email": "a@example.edu",
            "full_name": "A",
            "university_id": "0188d6a0-0000-7000-8000-000000000002",
            "created_at": "2024-01-01T00:00:00Z",
        }))
        .unwrap();
        assert!(!profile.is_admin());
        profile.role = UserRole::Admin;
        assert!(profile.is_admin());
    }
}
