//! Per-campaign analytics panels.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CompetitorAnalysis, MonteCarloResult, StrategicRecommendations};

impl ApiClient {
    pub async fn monte_carlo(&self, campaign_id: &str) -> Result<MonteCarloResult, ApiError> {
        self.get_json(&format!("/analytics/monte-carlo/{campaign_id}")).await
    }

    pub async fn competitor_analysis(&self, campaign_id: &str) -> Result<CompetitorAnalysis, ApiError> {
        self.get_json(&format!("/analytics/competitor-analysis/{campaign_id}"))
            .await
    }

    pub async fn strategic_recommendations(&self, campaign_id: &str) -> Result<StrategicRecommendations, ApiError> {
        self.get_json(&format!("/analytics/strategic-recommendations/{campaign_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use store::MemoryTokenStore;

    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_panels() {
        let router = Router::new()
            .route(
                "/api/analytics/monte-carlo/{id}",
                get(|| async {
                    Json(json!({
                        "pessimistic": 1200.0,
                        "realistic": 4100.0,
                        "optimistic": 7600.0,
                        "success_probability": 64.0,
                        "progression_data": [{ "day": 1, "amount": 100.0 }, { "day": 2, "amount": 180.0 }]
                    }))
                }),
            )
            .route(
                "/api/analytics/competitor-analysis/{id}",
                get(|| async {
                    Json(json!({
                        "market_overview": { "category_performance": "strong", "average_success_rate": "41%" },
                        "top_competitors": [{ "name": "Other", "funding": 20000.0 }]
                    }))
                }),
            )
            .route(
                "/api/analytics/strategic-recommendations/{id}",
                get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "Campaign not found" }))) }),
            );
        let client = client_for(router, MemoryTokenStore::with_token("t")).await;

        let sim = client.monte_carlo("c1").await.unwrap();
        assert_eq!(sim.progression_data.len(), 2);
        assert!(sim.key_insights.is_empty());

        let competitors = client.competitor_analysis("c1").await.unwrap();
        assert_eq!(competitors.top_competitors[0].name, "Other");
        assert_eq!(competitors.market_overview.unwrap().average_success_rate, "41%");

        let err = client.strategic_recommendations("c1").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
