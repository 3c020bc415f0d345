//! # User model
//!
//! [`UserInfo`] is the client-side copy of the backend user record. It is replaced
//! wholesale whenever the auth state changes (session restore, login, OAuth
//! callback, logout). Extra backend fields such as `password_hash` or
//! `created_at` are ignored on decode.

use serde::{Deserialize, Serialize};

/// User information as returned by `/api/auth/me` and the login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Avatar URL.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Uppercase first letter of the display name, for avatar fallbacks.
    pub fn initial(&self) -> String {
        initial_of(self.display_name(), 'U')
    }
}

/// Uppercase first character of `name`, or `fallback` when it is blank.
pub fn initial_of(name: &str, fallback: char) -> String {
    name.trim()
        .chars()
        .next()
        .unwrap_or(fallback)
        .to_uppercase()
        .collect()
}
