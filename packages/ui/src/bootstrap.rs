//! Session bootstrap run once when the app starts.
//!
//! Two independent steps, spawned side by side by [`AuthProvider`](crate::AuthProvider):
//! restoring the session behind the stored token, and finishing a Google
//! sign-in whose redirect left `#session_id=<id>` in the URL.

use api::{ApiClient, UserInfo};

const FRAGMENT_MARKER: &str = "session_id=";

/// The OAuth session identifier carried in a URL fragment such as
/// `#session_id=abc&state=x`. The value ends at the next `&`.
pub fn oauth_session_id_from_fragment(fragment: &str) -> Option<String> {
    let (_, rest) = fragment.split_once(FRAGMENT_MARKER)?;
    let id = rest.split('&').next().unwrap_or_default();
    (!id.is_empty()).then(|| id.to_string())
}

/// Ask the backend who the stored token belongs to. Any failure forgets the
/// token and yields an anonymous session.
pub async fn restore_session(client: &ApiClient) -> Option<UserInfo> {
    match client.current_user().await {
        Ok(user) => {
            tracing::info!("restored session for {}", user.email);
            Some(user)
        }
        Err(e) => {
            tracing::debug!("no session to restore: {}", e);
            client.tokens().clear();
            None
        }
    }
}

/// Exchange the OAuth session identifier for a bearer token, if `fragment`
/// carries one. `clear_fragment` runs after the exchange whether or not it
/// succeeded; it is not called when there is nothing to exchange.
pub async fn complete_oauth_redirect(
    client: &ApiClient,
    fragment: &str,
    clear_fragment: impl FnOnce(),
) -> Option<UserInfo> {
    let session_id = oauth_session_id_from_fragment(fragment)?;
    let user = match client.complete_google_login(&session_id).await {
        Ok(session) => Some(session.user),
        Err(e) => {
            tracing::error!("google sign-in could not be completed: {}", e);
            None
        }
    };
    clear_fragment();
    user
}
