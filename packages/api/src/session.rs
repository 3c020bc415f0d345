//! Authentication endpoints.
//!
//! Every call that hands out a session (`login`, `register`,
//! `complete_google_login`) stores the returned token in the client's
//! [`TokenStore`](store::TokenStore) before returning, so the next request is
//! already authenticated. `logout` forgets it once the backend confirms.

use reqwest::Method;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthSession, LoginRequest, LoginUrl, RegisterRequest, UserInfo};

/// Header carrying the OAuth session identifier on the callback exchange.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

impl ApiClient {
    /// `GET /api/auth/me`: the user behind the stored token or session cookie.
    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.get_json("/auth/me").await
    }

    /// `POST /api/auth/login`.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self.post_json("/auth/login", credentials).await?;
        self.tokens().set(&session.session_token);
        tracing::info!("logged in as {}", session.user.email);
        Ok(session)
    }

    /// `POST /api/auth/register`.
    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self.post_json("/auth/register", data).await?;
        self.tokens().set(&session.session_token);
        tracing::info!("registered {}", session.user.email);
        Ok(session)
    }

    /// `GET /api/auth/google-login`: URL of the external OAuth consent page.
    pub async fn google_login_url(&self) -> Result<String, ApiError> {
        let resp: LoginUrl = self.get_json("/auth/google-login").await?;
        Ok(resp.url)
    }

    /// `POST /api/auth/google/callback`: exchange the session identifier from the
    /// redirect fragment for a bearer token.
    pub async fn complete_google_login(&self, session_id: &str) -> Result<AuthSession, ApiError> {
        let req = self
            .request(Method::POST, "/auth/google/callback")
            .header(SESSION_ID_HEADER, session_id)
            .json(&json!({}));
        let session: AuthSession = self.execute(req).await?;
        self.tokens().set(&session.session_token);
        tracing::info!("google login completed for {}", session.user.email);
        Ok(session)
    }

    /// `POST /api/auth/logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute_unit(self.request(Method::POST, "/auth/logout")).await?;
        self.tokens().clear();
        tracing::info!("logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::{MemoryTokenStore, TokenStore};

    use crate::client::testing::client_for;

    fn user_json() -> Value {
        json!({ "id": "u1", "email": "ada@example.com", "name": "Ada", "is_admin": false })
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["email"], "ada@example.com");
                Json(json!({ "user": user_json(), "session_token": "fresh" }))
            }),
        );
        let tokens = MemoryTokenStore::new();
        let client = client_for(router, tokens.clone()).await;

        let session = client
            .login(&crate::LoginRequest {
                email: "ada@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(session.user.name, "Ada");
        assert_eq!(tokens.get().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_register_failure_surfaces_detail() {
        let router = Router::new().route(
            "/api/auth/register",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Email already registered" }))) }),
        );
        let tokens = MemoryTokenStore::new();
        let client = client_for(router, tokens.clone()).await;

        let err = client
            .register(&crate::RegisterRequest {
                email: "ada@example.com".into(),
                password: "secret".into(),
                name: "Ada".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn test_google_callback_sends_session_header() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let recorder = seen.clone();
        let router = Router::new().route(
            "/api/auth/google/callback",
            post(move |headers: HeaderMap| {
                let recorder = recorder.clone();
                async move {
                    let id = headers
                        .get("x-session-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    recorder.lock().unwrap().push(id);
                    Json(json!({ "user": user_json(), "session_token": "from-google" }))
                }
            }),
        );
        let tokens = MemoryTokenStore::new();
        let client = client_for(router, tokens.clone()).await;

        client.complete_google_login("sess-42").await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["sess-42".to_string()]);
        assert_eq!(tokens.get().as_deref(), Some("from-google"));
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let router = Router::new()
            .route("/api/auth/logout", post(|| async { Json(json!({ "message": "Logged out" })) }))
            .route("/api/auth/google-login", get(|| async { Json(json!({ "url": "https://accounts.example.com/o" })) }));
        let tokens = MemoryTokenStore::with_token("old");
        let client = client_for(router, tokens.clone()).await;

        assert_eq!(client.google_login_url().await.unwrap(), "https://accounts.example.com/o");
        client.logout().await.unwrap();
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn test_current_user_anonymous_is_unauthorized() {
        let router = Router::new().route(
            "/api/auth/me",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" }))) }),
        );
        let client = client_for(router, MemoryTokenStore::new()).await;
        assert!(client.current_user().await.unwrap_err().is_unauthorized());
    }
}
