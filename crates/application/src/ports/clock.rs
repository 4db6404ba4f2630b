//! Clock port for time-related operations

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Token expiry checks compare against an injected clock so the 30-second
/// margin boundary is testable with a fixed timestamp.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Current time in unix milliseconds, the unit expiry checks use.
    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
