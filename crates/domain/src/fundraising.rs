//! Fundraising campaign types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fundraising campaign shown as an ad in the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign id.
    pub id: Uuid,
    /// Tenant running the campaign.
    pub university_id: Uuid,
    /// Campaign title.
    pub title: String,
    /// Short pitch shown in the ad slot.
    #[serde(default)]
    pub blurb: Option<String>,
    /// Funding goal in cents.
    pub goal_cents: u64,
    /// Amount raised so far in cents.
    #[serde(default)]
    pub raised_cents: u64,
    /// When the campaign closes, if bounded.
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Percentage funded, clamped to 100.
    #[must_use]
    pub fn percent_funded(&self) -> u8 {
        if self.goal_cents == 0 {
            return 100;
        }
        let pct = self.raised_cents.saturating_mul(100) / self.goal_cents;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }
}

/// A donation recorded against a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Donation id.
    pub id: Uuid,
    /// Campaign donated to.
    pub campaign_id: Uuid,
    /// Amount in cents.
    pub amount_cents: u64,
    /// Optional public message.
    #[serde(default)]
    pub message: Option<String>,
    /// When the donation was made.
    pub created_at: DateTime<Utc>,
}

/// Payload for recording a donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDonation {
    /// Amount in cents.
    pub amount_cents: u64,
    /// Optional public message.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(goal: u64, raised: u64) -> Campaign {
        Campaign {
            id: Uuid::now_v7(),
            university_id: Uuid::now_v7(),
            title: "Library fund".to_string(),
            blurb: None,
            goal_cents: goal,
            raised_cents: raised,
            ends_at: None,
        }
    }

    #[test]
    fn test_percent_funded() {
        assert_eq!(campaign(10_000, 2_500).percent_funded(), 25);
        assert_eq!(campaign(10_000, 0).percent_funded(), 0);
        // Overfunded clamps.
        assert_eq!(campaign(10_000, 20_000).percent_funded(), 100);
        // Zero goal counts as fully funded.
        assert_eq!(campaign(0, 0).percent_funded(), 100);
    }
}
