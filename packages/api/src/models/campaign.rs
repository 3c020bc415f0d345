//! # Campaign and comment models
//!
//! | Type | Used for |
//! |------|----------|
//! | [`Campaign`] | Full record from `GET /api/campaigns[/{id}]`, `/api/my-campaigns`, `/api/admin/campaigns`. |
//! | [`RewardTier`] | Amount + description pair attached to a campaign. |
//! | [`NewCampaign`] | Body of `POST /api/campaigns/extended`, built by the creation wizard. |
//! | [`CampaignUpdate`] | Body of `PUT /api/campaigns/{id}` (admin edit). |
//! | [`Comment`] / [`NewComment`] | Campaign discussion thread. |
//!
//! Campaigns are never patched on the client; an edit sends the whole editable
//! field set and the view re-fetches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_DRAFT: &str = "draft";

/// Categories offered by the creation wizard.
pub const CATEGORIES: [&str; 8] = [
    "Education",
    "Technology",
    "Health",
    "Environment",
    "Arts",
    "Community",
    "Innovation",
    "Sports",
];

/// A crowdfunding campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: f64,
    #[serde(default)]
    pub backers_count: u32,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub reward_tiers: Vec<RewardTier>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

impl Campaign {
    /// Raised amount as a percentage of the goal, unclamped. A non-positive goal
    /// counts as 0 %.
    pub fn funding_percentage(&self) -> f64 {
        funding_percentage(self.raised_amount, self.goal_amount)
    }

    /// Width of the progress bar in percent, clamped to `0..=100`.
    pub fn progress_width(&self) -> f64 {
        progress_width(self.raised_amount, self.goal_amount)
    }

    pub fn creator_display_name(&self) -> &str {
        self.creator_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Campaign Creator")
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

pub fn funding_percentage(raised: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !goal.is_finite() || !raised.is_finite() {
        return 0.0;
    }
    raised / goal * 100.0
}

pub fn progress_width(raised: f64, goal: f64) -> f64 {
    funding_percentage(raised, goal).clamp(0.0, 100.0)
}

/// A reward offered to backers pledging at least `amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardTier {
    pub amount: f64,
    pub description: String,
}

/// Body of `POST /api/campaigns/extended`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_amount: f64,
    pub duration_days: u32,
    pub status: String,
    pub tags: Vec<String>,
    pub reward_tiers: Vec<RewardTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `PUT /api/campaigns/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CampaignUpdate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_amount: f64,
    pub image_url: Option<String>,
    pub status: String,
}

impl From<&Campaign> for CampaignUpdate {
    fn from(c: &Campaign) -> Self {
        Self {
            title: c.title.clone(),
            description: c.description.clone(),
            category: c.category.clone(),
            goal_amount: c.goal_amount,
            image_url: c.image_url.clone(),
            status: c.status.clone(),
        }
    }
}

/// A comment on a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Short date for display, e.g. `Mar 4, 2025`.
    pub fn display_date(&self) -> String {
        self.created_at
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewComment {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(goal: f64, raised: f64) -> Campaign {
        serde_json::from_value(serde_json::json!({
            "id": "c1",
            "title": "Solar school",
            "goal_amount": goal,
            "raised_amount": raised,
        }))
        .unwrap()
    }

    #[test]
    fn test_progress_quarter() {
        let c = campaign(10000.0, 2500.0);
        assert_eq!(c.progress_width(), 25.0);
        assert_eq!(c.funding_percentage(), 25.0);
    }

    #[test]
    fn test_progress_clamped_when_overfunded() {
        let c = campaign(10000.0, 12000.0);
        assert_eq!(c.progress_width(), 100.0);
        assert_eq!(c.funding_percentage().round(), 120.0);
    }

    #[test]
    fn test_progress_zero_goal() {
        assert_eq!(progress_width(500.0, 0.0), 0.0);
        assert_eq!(funding_percentage(500.0, -10.0), 0.0);
    }

    #[test]
    fn test_decode_defaults() {
        let c = campaign(100.0, 0.0);
        assert_eq!(c.status, STATUS_ACTIVE);
        assert!(c.is_active());
        assert!(c.reward_tiers.is_empty());
        assert_eq!(c.creator_display_name(), "Campaign Creator");
    }

    #[test]
    fn test_update_from_campaign() {
        let mut c = campaign(5000.0, 100.0);
        c.image_url = Some("https://img.example.com/a.jpg".into());
        let update = CampaignUpdate::from(&c);
        assert_eq!(update.title, "Solar school");
        assert_eq!(update.goal_amount, 5000.0);
        assert_eq!(update.image_url.as_deref(), Some("https://img.example.com/a.jpg"));
    }

    #[test]
    fn test_new_campaign_omits_empty_image() {
        let body = NewCampaign {
            title: "t".into(),
            description: "d".into(),
            category: "Arts".into(),
            goal_amount: 1000.0,
            duration_days: 30,
            status: STATUS_DRAFT.into(),
            tags: vec![],
            reward_tiers: vec![],
            image_url: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("image_url").is_none());
        assert_eq!(value["status"], "draft");
    }

    #[test]
    fn test_comment_date() {
        let comment: Comment = serde_json::from_str(
            r#"{"id":"m1","content":"Great idea","user_name":"Ada","created_at":"2025-03-04T10:00:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(comment.display_date(), "Mar 4, 2025");
    }
}
