//! Client-side error taxonomy.
//!
//! Every failed call ends up as one of four variants. Only [`ApiError::Unauthorized`]
//! has a global effect (the client clears the stored token before returning it);
//! everything else is handled at the call site, usually as a toast built from
//! [`ApiError::user_message`].

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401. The stored session token has already been cleared.
    #[error("unauthorized: {}", .detail.as_deref().unwrap_or("not authenticated"))]
    Unauthorized { detail: Option<String> },

    /// Any other non-2xx response.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Server { status: u16, detail: Option<String> },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Text to show the user: the backend's `detail` verbatim when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { detail: Some(d) } | ApiError::Server { detail: Some(d), .. } => {
                d.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extract the human-readable `detail` string from an error body.
///
/// Only string details count; validation errors arrive as arrays of objects and
/// fall back to the call-site message.
pub(crate) fn detail_from_body(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_body() {
        assert_eq!(
            detail_from_body(br#"{"detail":"Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
        assert!(detail_from_body(br#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#).is_none());
        assert!(detail_from_body(b"Internal Server Error").is_none());
        assert!(detail_from_body(br#"{"detail":"  "}"#).is_none());
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Server {
            status: 400,
            detail: Some("Goal must be positive".into()),
        };
        assert_eq!(err.user_message("Failed to create campaign"), "Goal must be positive");

        let err = ApiError::Server {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("Failed to create campaign"), "Failed to create campaign");

        let err = ApiError::Decode("missing field `id`".into());
        assert_eq!(err.user_message("Failed to load"), "Failed to load");
    }

    #[test]
    fn test_status_helpers() {
        let err = ApiError::Unauthorized { detail: None };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));

        let err = ApiError::Server {
            status: 403,
            detail: Some("Admin access required".into()),
        };
        assert!(err.is_forbidden());
        assert!(!err.is_unauthorized());
    }
}
