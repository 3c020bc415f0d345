//! HTTP plumbing shared by every endpoint.
//!
//! [`ApiClient`] owns a `reqwest::Client`, the `<origin>/api` prefix and the
//! [`TokenStore`] holding the session token. Each request goes through
//! [`ApiClient::execute`], which
//!
//! 1. attaches `Authorization: Bearer <token>` when a token is stored,
//! 2. forwards browser credentials (cookies) on wasm,
//! 3. clears the stored token on a 401,
//! 4. maps any other non-2xx into [`ApiError::Server`] with the backend `detail`.
//!
//! Endpoint methods live in the sibling modules (`session`, `campaigns`, ...), each
//! adding an `impl ApiClient` block.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::TokenStore;

use crate::error::{detail_from_body, ApiError};

/// Typed client for the FundLens backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.tokens.get().is_some())
            .finish()
    }
}

impl ApiClient {
    /// `base_url` is the REST prefix, e.g. `https://fund.example.com/api`.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store requests are authenticated from.
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        let req = match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();
        req
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    /// Send the request and decode a JSON body.
    pub(crate) async fn execute<R: DeserializeOwned>(&self, req: RequestBuilder) -> Result<R, ApiError> {
        let body = self.send(req).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send the request and ignore the body of a successful response.
    pub(crate) async fn execute_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.send(req).await.map(|_| ())
    }

    async fn send(&self, req: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!("request failed: {}", e);
            ApiError::Network(e)
        })?;
        let status = resp.status();
        let url = resp.url().path().to_string();
        tracing::debug!("{} {}", status.as_u16(), url);

        // The token goes before the body is read, so a broken 401 body still logs out.
        if status == StatusCode::UNAUTHORIZED {
            if self.tokens.get().is_some() {
                tracing::info!("401 from {}, clearing stored session token", url);
            }
            self.tokens.clear();
            let body = resp.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            return Err(ApiError::Unauthorized {
                detail: detail_from_body(&body),
            });
        }

        let body = resp.bytes().await?.to_vec();
        if status.is_success() {
            return Ok(body);
        }

        Err(ApiError::Server {
            status: status.as_u16(),
            detail: detail_from_body(&body),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-process fake backend for client tests.

    use std::sync::Arc;

    use store::MemoryTokenStore;

    use super::ApiClient;

    /// Serve `router` on an ephemeral port and return its `/api` prefix.
    pub async fn spawn_backend(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    pub async fn client_for(router: axum::Router, tokens: MemoryTokenStore) -> ApiClient {
        let base = spawn_backend(router).await;
        ApiClient::new(base, Arc::new(tokens))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::{MemoryTokenStore, TokenStore};

    use super::testing::client_for;
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/api/", Arc::new(MemoryTokenStore::new()));
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/campaigns"), "http://localhost:8000/api/campaigns");
        assert_eq!(client.url("auth/me"), "http://localhost:8000/api/auth/me");
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let router = Router::new().route(
            "/api/echo",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                Json(json!({ "authorization": auth }))
            }),
        );
        let tokens = MemoryTokenStore::with_token("tok-1");
        let client = client_for(router, tokens.clone()).await;

        let body: Value = client.get_json("/echo").await.unwrap();
        assert_eq!(body["authorization"], "Bearer tok-1");

        tokens.clear();
        let body: Value = client.get_json("/echo").await.unwrap();
        assert_eq!(body["authorization"], "");
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token() {
        let router = Router::new().route(
            "/api/campaigns",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" }))) }),
        );
        let tokens = MemoryTokenStore::with_token("expired");
        let client = client_for(router, tokens.clone()).await;

        let err = client.get_json::<Value>("/campaigns").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("fallback"), "Not authenticated");
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_with_truncated_body_still_clears_token() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            // promise 200 bytes, send a few, hang up
            socket
                .write_all(b"HTTP/1.1 401 Unauthorized\r\ncontent-type: application/json\r\ncontent-length: 200\r\n\r\n{\"detail\"")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let tokens = MemoryTokenStore::with_token("stale");
        let client = ApiClient::new(format!("http://{addr}/api"), Arc::new(tokens.clone()));

        let err = client.current_user().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn test_other_errors_keep_token() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/api/admin/stats",
            get(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { (StatusCode::FORBIDDEN, Json(json!({ "detail": "Admin access required" }))) }
            }),
        );
        let tokens = MemoryTokenStore::with_token("user-token");
        let client = client_for(router, tokens.clone()).await;

        let err = client.get_json::<Value>("/admin/stats").await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(err.user_message("Failed to load admin data"), "Admin access required");
        assert_eq!(tokens.get().as_deref(), Some("user-token"));
        // no automatic retry
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_decode_error() {
        let router = Router::new().route("/api/campaigns", get(|| async { Json(json!({ "unexpected": true })) }));
        let client = client_for(router, MemoryTokenStore::new()).await;

        let err = client.get_json::<Vec<Value>>("/campaigns").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_error() {
        // Port 9 (discard) on localhost is not listening in the test environment.
        let client = ApiClient::new("http://127.0.0.1:9/api", Arc::new(MemoryTokenStore::new()));
        let err = client.get_json::<Value>("/campaigns").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.user_message("Failed to load campaigns"), "Failed to load campaigns");
    }
}
