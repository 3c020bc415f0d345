//! Payloads of the AI-assist endpoints used by the campaign-creation wizard and
//! the chat widget. Responses are generated text, so everything beyond the one
//! field each endpoint is about decodes leniently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::campaign::RewardTier;

/// Body of `/api/ai/optimize-title`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleRequest {
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TitleSuggestions {
    #[serde(default)]
    pub titles: Vec<String>,
}

/// Body of `/api/ai/enhance-description` and `/api/ai/marketing-strategy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignBrief {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal_amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnhancedDescription {
    pub enhanced_description: String,
}

/// Body of `/api/ai/success-prediction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub brief: CampaignBrief,
    pub reward_tiers: Vec<RewardTier>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuccessPrediction {
    #[serde(default)]
    pub success_percentage: f64,
    #[serde(default)]
    pub confidence_level: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketingStrategy {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub target_audience: Option<TargetAudience>,
    #[serde(default)]
    pub channels: Vec<MarketingChannel>,
    #[serde(default)]
    pub timeline: Vec<MarketingPhase>,
    #[serde(default)]
    pub key_messages: Vec<String>,
    #[serde(default)]
    pub budget_allocation: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetAudience {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketingChannel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub priority: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketingPhase {
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Body of `/api/ai/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}
