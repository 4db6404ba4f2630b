//! Event and RSVP types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::GeoPoint;

/// An alumni event (reunion, talk, meetup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event id.
    pub id: Uuid,
    /// Tenant hosting the event.
    pub university_id: Uuid,
    /// Event title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Venue name, when physical.
    #[serde(default)]
    pub venue: Option<String>,
    /// Venue coordinates, used for the attendance heatmap.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Start time.
    pub starts_at: DateTime<Utc>,
    /// End time, when known.
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    /// Number of confirmed attendees.
    #[serde(default)]
    pub attendee_count: u32,
}

impl Event {
    /// Returns true if the event is already over at `now`.
    #[must_use]
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.unwrap_or(self.starts_at) < now
    }
}

/// RSVP answer for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    /// Attending.
    Going,
    /// Maybe attending.
    Interested,
    /// Not attending.
    Declined,
}

/// A user's RSVP to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    /// Event the RSVP is for.
    pub event_id: Uuid,
    /// User answering.
    pub user_id: Uuid,
    /// The answer.
    pub status: RsvpStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_past_uses_end_when_present() {
        let starts = Utc.with_ymd_and_hms(2026, 1, 1, 18, 0, 0).unwrap();
        let ends = Utc.with_ymd_and_hms(2026, 1, 1, 22, 0, 0).unwrap();
        let event = Event {
            id: Uuid::now_v7(),
            university_id: Uuid::now_v7(),
            title: "Reunion".to_string(),
            description: None,
            venue: None,
            location: None,
            starts_at: starts,
            ends_at: Some(ends),
            attendee_count: 0,
        };
        let mid = Utc.with_ymd_and_hms(2026, 1, 1, 20, 0, 0).unwrap();
        assert!(!event.is_past(mid));
        let later = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        assert!(event.is_past(later));
    }
}
