//! Tenant administration types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A university tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    /// Tenant id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL slug used in portal routes.
    pub slug: String,
    /// Email domain used to auto-assign registrations, when set.
    #[serde(default)]
    pub email_domain: Option<String>,
}

/// Outcome of a bulk user import, as reported by the backend.
///
/// The client uploads the CSV as-is; parsing and row validation happen
/// server side, and every rejected row comes back with its line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImportReport {
    /// Rows that created a new user.
    pub created: u32,
    /// Rows that matched and updated an existing user.
    pub updated: u32,
    /// Rows skipped without error (blank lines, duplicates in-file).
    pub skipped: u32,
    /// Rows rejected with an error.
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

impl ImportReport {
    /// Returns true if every row was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of rows the server processed.
    #[must_use]
    pub fn total_rows(&self) -> u64 {
        u64::from(self.created)
            + u64::from(self.updated)
            + u64::from(self.skipped)
            + u64::try_from(self.errors.len()).unwrap_or(u64::MAX)
    }
}

/// A rejected row in a bulk import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRowError {
    /// 1-based CSV line number.
    pub line: u64,
    /// Why the row was rejected.
    pub message: String,
}
