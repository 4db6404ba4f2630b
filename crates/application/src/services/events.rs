//! Event operations.

use std::sync::Arc;

use alumnet_domain::request::ApiRequest;
use alumnet_domain::{Event, GeoPoint, HeatBucket, Page, PageQuery, Rsvp, RsvpStatus};
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::ApiTransport;

/// Geohash precision used for the attendance heatmap cells.
///
/// Six characters is roughly a 1.2 km x 0.6 km cell, city-block scale.
const HEATMAP_PRECISION: usize = 6;

/// Event and RSVP operations.
pub struct EventsApi<T> {
    transport: Arc<T>,
}

impl<T: ApiTransport> EventsApi<T> {
    /// Creates the service.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists upcoming events for the caller's university.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list(&self, query: &PageQuery) -> Result<Page<Event>, ApiError> {
        let req = ApiRequest::get("/events").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Answers an event invitation.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn rsvp(&self, event_id: Uuid, status: RsvpStatus) -> Result<Rsvp, ApiError> {
        let req = ApiRequest::post(format!("/events/{event_id}/rsvp"))
            .with_json(&serde_json::json!({ "status": status }))?;
        self.transport.execute(req).await?.json()
    }

    /// Fetches attendee home coordinates and buckets them for the heatmap.
    ///
    /// The backend returns raw points; bucketing happens client side so the
    /// map zoom level controls nothing server-side.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn attendance_heatmap(&self, event_id: Uuid) -> Result<Vec<HeatBucket>, ApiError> {
        let req = ApiRequest::get(format!("/events/{event_id}/attendance"));
        let points: Vec<GeoPoint> = self.transport.execute(req).await?.json()?;
        Ok(HeatBucket::aggregate(&points, HEATMAP_PRECISION))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::StubTransport;

    #[tokio::test]
    async fn test_rsvp_serializes_status() {
        let event_id = Uuid::now_v7();
        let body = serde_json::json!({
            "event_id": event_id,
            "user_id": "0188d6a0-0000-7000-8000-000000000001",
            "status": "going",
        })
        .to_string();
        let transport = Arc::new(StubTransport::replying(&[&body]));
        let api = EventsApi::new(Arc::clone(&transport));

        let rsvp = api.rsvp(event_id, RsvpStatus::Going).await.unwrap();
        assert_eq!(rsvp.status, RsvpStatus::Going);

        let requests = transport.requests();
        assert_eq!(requests[0].path, format!("/events/{event_id}/rsvp"));
        assert_eq!(requests[0].body, Some(serde_json::json!({"status": "going"})));
    }

    #[tokio::test]
    async fn test_heatmap_buckets_client_side() {
        // Two points in the same block, one across the ocean.
        let body = serde_json::json!([
            {"lat": 40.7128, "lon": -74.0060},
            {"lat": 40.7129, "lon": -74.0061},
            {"lat": 51.5074, "lon": -0.1278},
        ])
        .to_string();
        let transport = Arc::new(StubTransport::replying(&[&body]));
        let api = EventsApi::new(Arc::clone(&transport));

        let buckets = api.attendance_heatmap(Uuid::now_v7()).await.unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].count, 2);
    }
}
