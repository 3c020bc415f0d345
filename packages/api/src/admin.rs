//! Administrator endpoints. All of them answer 403 for non-admin users.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AdminStats, Campaign, UserInfo};

impl ApiClient {
    pub async fn admin_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get_json("/admin/campaigns").await
    }

    pub async fn admin_users(&self) -> Result<Vec<UserInfo>, ApiError> {
        self.get_json("/admin/users").await
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/stats").await
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use store::{MemoryTokenStore, TokenStore};

    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_admin_listing() {
        let router = Router::new()
            .route(
                "/api/admin/stats",
                get(|| async { Json(json!({ "total_campaigns": 4, "active_campaigns": 3, "total_users": 9, "total_raised": 1520.5 })) }),
            )
            .route(
                "/api/admin/users",
                get(|| async { Json(json!([{ "id": "u1", "email": "root@example.com", "is_admin": true }])) }),
            )
            .route("/api/admin/campaigns", get(|| async { Json(json!([])) }));
        let client = client_for(router, MemoryTokenStore::with_token("admin")).await;

        let stats = client.admin_stats().await.unwrap();
        assert_eq!(stats.active_campaigns, 3);
        assert_eq!(stats.total_raised, 1520.5);
        assert!(client.admin_users().await.unwrap()[0].is_admin);
        assert!(client.admin_campaigns().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let router = Router::new().route(
            "/api/admin/stats",
            get(|| async { (StatusCode::FORBIDDEN, Json(json!({ "detail": "Admin access required" }))) }),
        );
        let tokens = MemoryTokenStore::with_token("user");
        let client = client_for(router, tokens.clone()).await;

        let err = client.admin_stats().await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(tokens.get().as_deref(), Some("user"));
    }
}
