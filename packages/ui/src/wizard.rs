//! # Campaign-creation wizard state
//!
//! The create page walks through three steps held entirely in memory:
//!
//! | Step | Collects |
//! |------|----------|
//! | [`WizardStep::Basics`] | title, description, category, goal, duration, status, tags, image URL |
//! | [`WizardStep::Rewards`] | reward tiers |
//! | [`WizardStep::Optimize`] | AI title suggestions, enhanced description, success prediction, marketing strategy |
//!
//! [`CampaignDraft`] owns the form values and turns them into request bodies.
//! Every builder checks its own required fields and reports what is missing
//! through [`DraftError`], which the page shows as a toast.

use api::{
    CampaignBrief, MarketingStrategy, NewCampaign, PredictionRequest, RewardTier, SuccessPrediction,
    TitleRequest, STATUS_ACTIVE,
};

pub const DEFAULT_DURATION_DAYS: u32 = 30;
pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 90;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Goal amount must be a positive number")]
    InvalidGoal,
    #[error("A reward tier needs both an amount and a description")]
    IncompleteTier,
    #[error("Reward amount must be a positive number")]
    InvalidTierAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Basics,
    Rewards,
    Optimize,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Basics, WizardStep::Rewards, WizardStep::Optimize];

    pub fn number(self) -> usize {
        match self {
            WizardStep::Basics => 1,
            WizardStep::Rewards => 2,
            WizardStep::Optimize => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Basics => "Basic Info",
            WizardStep::Rewards => "Reward Tiers",
            WizardStep::Optimize => "AI Optimization",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Basics => Some(WizardStep::Rewards),
            WizardStep::Rewards => Some(WizardStep::Optimize),
            WizardStep::Optimize => None,
        }
    }

    pub fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::Basics => None,
            WizardStep::Rewards => Some(WizardStep::Basics),
            WizardStep::Optimize => Some(WizardStep::Rewards),
        }
    }
}

/// Form values of the wizard plus the AI results gathered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Raw goal input; parsed on use.
    pub goal_amount: String,
    pub duration_days: u32,
    pub status: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub reward_tiers: Vec<RewardTier>,

    pub title_suggestions: Vec<String>,
    pub enhanced_description: Option<String>,
    pub prediction: Option<SuccessPrediction>,
    pub marketing: Option<MarketingStrategy>,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            goal_amount: String::new(),
            duration_days: DEFAULT_DURATION_DAYS,
            status: STATUS_ACTIVE.to_string(),
            tags: Vec::new(),
            image_url: String::new(),
            reward_tiers: Vec::new(),
            title_suggestions: Vec::new(),
            enhanced_description: None,
            prediction: None,
            marketing: None,
        }
    }
}

/// A positive amount, or `None`.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

impl CampaignDraft {
    /// Add a tag unless it is blank or already present. Returns whether it was added.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn set_duration(&mut self, days: u32) {
        self.duration_days = days.clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);
    }

    pub fn add_reward_tier(&mut self, amount: &str, description: &str) -> Result<(), DraftError> {
        let description = description.trim();
        if amount.trim().is_empty() || description.is_empty() {
            return Err(DraftError::IncompleteTier);
        }
        let amount = parse_amount(amount).ok_or(DraftError::InvalidTierAmount)?;
        self.reward_tiers.push(RewardTier {
            amount,
            description: description.to_string(),
        });
        Ok(())
    }

    pub fn remove_reward_tier(&mut self, index: usize) {
        if index < self.reward_tiers.len() {
            self.reward_tiers.remove(index);
        }
    }

    pub fn apply_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Keep an AI-enhanced description. Blank text counts as nothing generated
    /// and leaves the previous value alone. Returns whether it was kept.
    pub fn set_enhanced_description(&mut self, text: String) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.enhanced_description = Some(text);
        true
    }

    fn usable_enhanced_description(&self) -> Option<&str> {
        self.enhanced_description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Copy the enhanced description into the description field.
    pub fn apply_enhanced_description(&mut self) {
        if let Some(enhanced) = self.usable_enhanced_description() {
            self.description = enhanced.to_string();
        }
    }

    /// The description submitted: the AI-enhanced one when generated.
    pub fn effective_description(&self) -> &str {
        self.usable_enhanced_description().unwrap_or(&self.description)
    }

    fn missing_text_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Missing text fields are reported before an invalid goal.
    fn checked_goal(&self) -> Result<f64, DraftError> {
        let mut missing = self.missing_text_fields();
        if self.goal_amount.trim().is_empty() {
            missing.push("goal amount");
        }
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }
        parse_amount(&self.goal_amount).ok_or(DraftError::InvalidGoal)
    }

    /// Body of the title-suggestion request; needs title, description and category.
    pub fn title_request(&self) -> Result<TitleRequest, DraftError> {
        let missing = self.missing_text_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }
        Ok(TitleRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
        })
    }

    /// Body of the description and marketing requests; also needs a goal.
    pub fn brief(&self) -> Result<CampaignBrief, DraftError> {
        let goal_amount = self.checked_goal()?;
        Ok(CampaignBrief {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            goal_amount,
        })
    }

    pub fn prediction_request(&self) -> Result<PredictionRequest, DraftError> {
        Ok(PredictionRequest {
            brief: self.brief()?,
            reward_tiers: self.reward_tiers.clone(),
        })
    }

    /// Body of `POST /api/campaigns/extended`.
    pub fn to_payload(&self) -> Result<NewCampaign, DraftError> {
        let goal_amount = self.checked_goal()?;
        let image_url = self.image_url.trim();
        Ok(NewCampaign {
            title: self.title.trim().to_string(),
            description: self.effective_description().to_string(),
            category: self.category.clone(),
            goal_amount,
            duration_days: self.duration_days,
            status: self.status.clone(),
            tags: self.tags.clone(),
            reward_tiers: self
                .reward_tiers
                .iter()
                .filter(|t| t.amount > 0.0 && !t.description.trim().is_empty())
                .cloned()
                .collect(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CampaignDraft {
        CampaignDraft {
            title: "Solar Lamps".into(),
            description: "Lamps for rural classrooms".into(),
            category: "Environment".into(),
            goal_amount: "12000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let draft = CampaignDraft::default();
        assert_eq!(draft.duration_days, 30);
        assert_eq!(draft.status, "active");
    }

    #[test]
    fn test_steps() {
        assert_eq!(WizardStep::default(), WizardStep::Basics);
        assert_eq!(WizardStep::Basics.next(), Some(WizardStep::Rewards));
        assert_eq!(WizardStep::Optimize.next(), None);
        assert_eq!(WizardStep::Rewards.prev(), Some(WizardStep::Basics));
        assert_eq!(WizardStep::Basics.prev(), None);
        assert_eq!(WizardStep::Optimize.number(), 3);
    }

    #[test]
    fn test_tags_trimmed_and_unique() {
        let mut draft = CampaignDraft::default();
        assert!(draft.add_tag("  solar "));
        assert!(!draft.add_tag("solar"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("schools"));
        draft.remove_tag("solar");
        assert_eq!(draft.tags, vec!["schools"]);
    }

    #[test]
    fn test_duration_clamped() {
        let mut draft = CampaignDraft::default();
        draft.set_duration(0);
        assert_eq!(draft.duration_days, 1);
        draft.set_duration(365);
        assert_eq!(draft.duration_days, 90);
    }

    #[test]
    fn test_reward_tier_validation() {
        let mut draft = CampaignDraft::default();
        assert_eq!(draft.add_reward_tier("", "Sticker"), Err(DraftError::IncompleteTier));
        assert_eq!(draft.add_reward_tier("10", "  "), Err(DraftError::IncompleteTier));
        assert_eq!(draft.add_reward_tier("-5", "Sticker"), Err(DraftError::InvalidTierAmount));
        assert_eq!(draft.add_reward_tier("ten", "Sticker"), Err(DraftError::InvalidTierAmount));
        draft.add_reward_tier("10", "Sticker").unwrap();
        draft.add_reward_tier("50", "T-shirt").unwrap();
        draft.remove_reward_tier(7);
        draft.remove_reward_tier(0);
        assert_eq!(draft.reward_tiers.len(), 1);
        assert_eq!(draft.reward_tiers[0].description, "T-shirt");
    }

    #[test]
    fn test_ai_requests_need_their_fields() {
        let mut draft = CampaignDraft {
            title: "Solar Lamps".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.title_request(),
            Err(DraftError::MissingFields(vec!["description", "category"]))
        );
        draft.description = "Lamps".into();
        draft.category = "Environment".into();
        assert!(draft.title_request().is_ok());
        assert_eq!(draft.brief(), Err(DraftError::MissingFields(vec!["goal amount"])));
        draft.goal_amount = "0".into();
        assert_eq!(draft.brief(), Err(DraftError::InvalidGoal));
        draft.goal_amount = "500".into();
        assert_eq!(draft.prediction_request().unwrap().brief.goal_amount, 500.0);
    }

    #[test]
    fn test_missing_fields_message() {
        let err = CampaignDraft::default().title_request().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in title, description, category");
    }

    #[test]
    fn test_payload_prefers_enhanced_description() {
        let mut draft = filled();
        assert_eq!(draft.to_payload().unwrap().description, "Lamps for rural classrooms");

        draft.enhanced_description = Some("A brighter future for rural schools".into());
        assert_eq!(
            draft.to_payload().unwrap().description,
            "A brighter future for rural schools"
        );
    }

    #[test]
    fn test_blank_enhanced_description_keeps_original() {
        let mut draft = filled();
        draft.enhanced_description = Some(String::new());
        assert_eq!(draft.to_payload().unwrap().description, "Lamps for rural classrooms");

        draft.enhanced_description = Some("  \n ".into());
        draft.apply_enhanced_description();
        assert_eq!(draft.description, "Lamps for rural classrooms");
        assert_eq!(draft.effective_description(), "Lamps for rural classrooms");
    }

    #[test]
    fn test_set_enhanced_description_skips_blank() {
        let mut draft = filled();
        assert!(!draft.set_enhanced_description("   ".into()));
        assert_eq!(draft.enhanced_description, None);

        assert!(draft.set_enhanced_description("Brighter nights".into()));
        assert!(!draft.set_enhanced_description(String::new()));
        assert_eq!(draft.enhanced_description.as_deref(), Some("Brighter nights"));
    }

    #[test]
    fn test_payload_omits_incomplete_tiers() {
        let mut draft = filled();
        draft.reward_tiers = vec![
            RewardTier {
                amount: 25.0,
                description: "Postcard".into(),
            },
            RewardTier {
                amount: 0.0,
                description: "Nothing".into(),
            },
            RewardTier {
                amount: 40.0,
                description: String::new(),
            },
        ];
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.reward_tiers.len(), 1);
        assert_eq!(payload.reward_tiers[0].description, "Postcard");
        assert_eq!(payload.goal_amount, 12000.0);
        assert_eq!(payload.image_url, None);
    }

    #[test]
    fn test_payload_requires_positive_goal() {
        let mut draft = filled();
        draft.goal_amount = "-1".into();
        assert_eq!(draft.to_payload(), Err(DraftError::InvalidGoal));
    }

    #[test]
    fn test_apply_suggestions() {
        let mut draft = filled();
        draft.apply_title("Light a Classroom");
        draft.enhanced_description = Some("Better words".into());
        draft.apply_enhanced_description();
        assert_eq!(draft.title, "Light a Classroom");
        assert_eq!(draft.description, "Better words");
    }
}
