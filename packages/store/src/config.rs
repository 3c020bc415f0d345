//! # Client configuration — `fundlens.toml`
//!
//! Settings the web client needs before it can talk to the backend. The file is
//! optional: every field has a serde default, so a missing or empty file is the
//! same as [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""              # backend origin; empty = same origin as the page
//!
//! [payments]
//! poll_max_attempts = 5      # status requests after returning from checkout
//! poll_interval_secs = 2     # delay between two status requests
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend origin. [`ClientConfig::api_base`] appends the `/api` prefix. |
//! | [`PaymentsConfig`] | Payment-status polling policy after a checkout redirect. |
//!
//! The web build seeds `api.base_url` from the `FUNDLENS_BACKEND_URL` variable at
//! compile time through [`ClientConfig::from_build_env`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub payments: PaymentsConfig,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend service, e.g. `https://fund.example.com`.
    /// Empty string means the page's own origin.
    #[serde(default)]
    pub base_url: String,
}

/// Payment-status polling policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentsConfig {
    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u32,
}

fn default_poll_max_attempts() -> u32 {
    5
}

fn default_poll_interval_secs() -> u32 {
    2
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            poll_max_attempts: default_poll_max_attempts(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl PaymentsConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.poll_interval_secs))
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            payments: PaymentsConfig::default(),
        }
    }

    /// Builder method to override the payment polling policy.
    pub fn with_payment_polling(mut self, max_attempts: u32, interval_secs: u32) -> Self {
        self.payments.poll_max_attempts = max_attempts;
        self.payments.poll_interval_secs = interval_secs;
        self
    }

    /// Config baked in at build time from `FUNDLENS_BACKEND_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FUNDLENS_BACKEND_URL").unwrap_or_default())
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "fundlens.toml"
    }

    /// REST prefix for every endpoint: `<base_url>/api`, or `/api` when the
    /// base is empty.
    pub fn api_base(&self) -> String {
        let base = self.api.base_url.trim().trim_end_matches('/');
        format!("{base}/api")
    }

    /// Same as [`api_base`](Self::api_base) but resolves an empty base against
    /// `origin` (the page origin on the web).
    pub fn api_base_for_origin(&self, origin: &str) -> String {
        if self.api.base_url.trim().is_empty() {
            format!("{}/api", origin.trim_end_matches('/'))
        } else {
            self.api_base()
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.payments.poll_max_attempts, 5);
        assert_eq!(config.payments.poll_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://fund.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://fund.example.com/");
        assert_eq!(config.payments, PaymentsConfig::default());
    }

    #[test]
    fn test_api_base() {
        assert_eq!(ClientConfig::default().api_base(), "/api");
        assert_eq!(
            ClientConfig::new("https://fund.example.com/").api_base(),
            "https://fund.example.com/api"
        );
    }

    #[test]
    fn test_api_base_for_origin() {
        let config = ClientConfig::default();
        assert_eq!(
            config.api_base_for_origin("http://localhost:8080"),
            "http://localhost:8080/api"
        );

        let config = ClientConfig::new("https://fund.example.com");
        assert_eq!(
            config.api_base_for_origin("http://localhost:8080"),
            "https://fund.example.com/api"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://localhost:8000").with_payment_polling(3, 1);
        let text = config.to_toml().unwrap();
        assert!(text.contains("poll_max_attempts = 3"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
