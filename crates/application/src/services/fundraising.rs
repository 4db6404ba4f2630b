//! Fundraising operations.

use std::sync::Arc;

use alumnet_domain::fundraising::NewDonation;
use alumnet_domain::request::ApiRequest;
use alumnet_domain::{Campaign, Donation, Page, PageQuery};
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::ApiTransport;

/// Fundraising campaign operations.
pub struct FundraisingApi<T> {
    transport: Arc<T>,
}

impl<T: ApiTransport> FundraisingApi<T> {
    /// Creates the service.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists active campaigns for the caller's university.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn campaigns(&self, query: &PageQuery) -> Result<Page<Campaign>, ApiError> {
        let req = ApiRequest::get("/fundraising/campaigns").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Records a donation against a campaign.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] with 422 when the amount is rejected.
    pub async fn donate(
        &self,
        campaign_id: Uuid,
        donation: &NewDonation,
    ) -> Result<Donation, ApiError> {
        let req = ApiRequest::post(format!("/fundraising/campaigns/{campaign_id}/donations"))
            .with_json(donation)?;
        self.transport.execute(req).await?.json()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::StubTransport;

    #[tokio::test]
    async fn test_donate_posts_amount() {
        let campaign_id = Uuid::now_v7();
        let body = serde_json::json!({
            "id": "0188d6a0-0000-7000-8000-00000000000b",
            "campaign_id": campaign_id,
            "amount_cents": 5000,
            "created_at": "2026-01-01T00:00:00Z",
        })
        .to_string();
        let transport = Arc::new(StubTransport::replying(&[&body]));
        let api = FundraisingApi::new(Arc::clone(&transport));

        let donation = api
            .donate(
                campaign_id,
                &NewDonation {
                    amount_cents: 5000,
                    message: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(donation.amount_cents, 5000);

        let requests = transport.requests();
        assert_eq!(
            requests[0].path,
            format!("/fundraising/campaigns/{campaign_id}/donations")
        );
    }
}
