//! Mentoring operations.

use std::sync::Arc;

use alumnet_domain::request::ApiRequest;
use alumnet_domain::{MentorshipRequest, MentorshipStatus, Page, PageQuery, UserProfile};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::ApiTransport;

/// Payload for asking a mentor for help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMentorshipRequest {
    /// Mentor being asked.
    pub mentor_id: Uuid,
    /// What the mentee wants help with.
    pub topic: String,
    /// Free-form intro message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Mentoring operations.
pub struct MentoringApi<T> {
    transport: Arc<T>,
}

impl<T: ApiTransport> MentoringApi<T> {
    /// Creates the service.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists alumni who volunteered as mentors.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn mentors(&self, query: &PageQuery) -> Result<Page<UserProfile>, ApiError> {
        let req = ApiRequest::get("/mentoring/mentors").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Lists mentorship requests involving the caller, either side.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn requests(&self, query: &PageQuery) -> Result<Page<MentorshipRequest>, ApiError> {
        let req = ApiRequest::get("/mentoring/requests").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Sends a mentorship request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn request(
        &self,
        request: &NewMentorshipRequest,
    ) -> Result<MentorshipRequest, ApiError> {
        let req = ApiRequest::post("/mentoring/requests").with_json(request)?;
        self.transport.execute(req).await?.json()
    }

    /// Answers a pending request addressed to the caller as mentor.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn respond(
        &self,
        request_id: Uuid,
        accept: bool,
    ) -> Result<MentorshipRequest, ApiError> {
        let status = if accept {
            MentorshipStatus::Accepted
        } else {
            MentorshipStatus::Declined
        };
        let req = ApiRequest::post(format!("/mentoring/requests/{request_id}/respond"))
            .with_json(&serde_json::json!({ "status": status }))?;
        self.transport.execute(req).await?.json()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::StubTransport;

    fn request_body(status: &str) -> String {
        serde_json::json!({
            "id": "0188d6a0-0000-7000-8000-00000000000a",
            "mentee_id": "0188d6a0-0000-7000-8000-000000000001",
            "mentor_id": "0188d6a0-0000-7000-8000-000000000002",
            "topic": "career change",
            "status": status,
            "created_at": "2026-01-01T00:00:00Z",
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_respond_serializes_status() {
        let transport = Arc::new(StubTransport::replying(&[&request_body("accepted")]));
        let api = MentoringApi::new(Arc::clone(&transport));

        let id = Uuid::now_v7();
        let updated = api.respond(id, true).await.unwrap();
        assert_eq!(updated.status, MentorshipStatus::Accepted);

        let requests = transport.requests();
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"status": "accepted"}))
        );
    }

    #[tokio::test]
    async fn test_request_omits_empty_message() {
        let transport = Arc::new(StubTransport::replying(&[&request_body("pending")]));
        let api = MentoringApi::new(Arc::clone(&transport));

        let mentor_id = Uuid::now_v7();
        api.request(&NewMentorshipRequest {
            mentor_id,
            topic: "career change".to_string(),
            message: None,
        })
        .await
        .unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({
                "mentor_id": mentor_id,
                "topic": "career change",
            }))
        );
    }
}
