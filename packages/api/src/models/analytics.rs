//! # Analytics snapshots
//!
//! Read-only payloads rendered by the analytics panels and the discover badges.
//! The client never caches or merges them; each panel re-fetches on demand.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`CampaignAnalysis`] | `GET /api/campaigns/{id}/analysis` |
//! | [`MonteCarloResult`] | `GET /api/analytics/monte-carlo/{id}` |
//! | [`CompetitorAnalysis`] | `GET /api/analytics/competitor-analysis/{id}` |
//! | [`StrategicRecommendations`] | `GET /api/analytics/strategic-recommendations/{id}` |

use serde::{Deserialize, Serialize};

use super::campaign::RewardTier;

/// Probability at or above which a campaign gets the "likely success" badge.
pub const SUCCESS_BADGE_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CampaignAnalysis {
    #[serde(default)]
    pub success_probability: f64,
    #[serde(default)]
    pub analysis_text: String,
}

impl CampaignAnalysis {
    pub fn shows_success_badge(&self) -> bool {
        self.success_probability >= SUCCESS_BADGE_THRESHOLD
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonteCarloResult {
    #[serde(default)]
    pub pessimistic: f64,
    #[serde(default)]
    pub realistic: f64,
    #[serde(default)]
    pub optimistic: f64,
    #[serde(default)]
    pub success_probability: f64,
    #[serde(default)]
    pub progression_data: Vec<ProgressionPoint>,
    #[serde(default)]
    pub key_insights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressionPoint {
    pub day: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompetitorAnalysis {
    #[serde(default)]
    pub market_overview: Option<MarketOverview>,
    #[serde(default)]
    pub key_trends: Vec<String>,
    #[serde(default)]
    pub top_competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketOverview {
    #[serde(default)]
    pub category_performance: String,
    #[serde(default)]
    pub average_success_rate: String,
    #[serde(default)]
    pub typical_funding_min: f64,
    #[serde(default)]
    pub typical_funding_max: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Competitor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub funding: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub success_factors: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StrategicRecommendations {
    #[serde(default)]
    pub success_prediction: Option<PredictionSummary>,
    #[serde(default)]
    pub success_factors: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub action_recommendations: Vec<ActionRecommendation>,
    #[serde(default)]
    pub strategic_recommendations: Vec<StrategicRecommendation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionSummary {
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub category_average: String,
    #[serde(default)]
    pub similar_campaigns: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionRecommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StrategicRecommendation {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reward_tiers: Vec<RewardTier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_threshold() {
        let analysis = CampaignAnalysis {
            success_probability: 70.0,
            analysis_text: String::new(),
        };
        assert!(analysis.shows_success_badge());

        let analysis = CampaignAnalysis {
            success_probability: 69.9,
            analysis_text: String::new(),
        };
        assert!(!analysis.shows_success_badge());
    }

    #[test]
    fn test_fallback_payloads_decode() {
        let recs: StrategicRecommendations = serde_json::from_str(
            r#"{"success_prediction":{"percentage":85,"level":"High","category_average":"65% success rate",
                "similar_campaigns":"..."},"success_factors":["Strong backing"],"risk_factors":["Market competition"],
                "action_recommendations":[],"strategic_recommendations":[]}"#,
        )
        .unwrap();
        assert_eq!(recs.success_prediction.unwrap().percentage, 85.0);

        let competitors: CompetitorAnalysis =
            serde_json::from_str(r#"{"key_trends":["Growing interest"],"top_competitors":[]}"#).unwrap();
        assert!(competitors.market_overview.is_none());

        let sim: MonteCarloResult = serde_json::from_str(
            r#"{"pessimistic":4750.0,"realistic":7000.0,"optimistic":8350.0,"success_probability":72.5,
                "progression_data":[{"day":1,"amount":2600.5}]}"#,
        )
        .unwrap();
        assert_eq!(sim.progression_data.len(), 1);
        assert!(sim.key_insights.is_empty());
    }
}
