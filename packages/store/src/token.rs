//! # Session token storage
//!
//! The only state the client persists is the bearer token handed out by the
//! backend after login, registration or the OAuth callback. [`TokenStore`] is the
//! seam the API client reads it through, so the same client code runs against
//! browser `localStorage` ([`crate::LocalStorageTokenStore`]), a file on disk
//! ([`crate::FileTokenStore`]) or memory ([`crate::MemoryTokenStore`]).
//!
//! Implementations swallow their own I/O errors: an unreadable store degrades to
//! "no token", which the rest of the client treats as an anonymous session.

/// Fixed key under which the bearer token is persisted.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Storage for the session bearer token.
pub trait TokenStore: Send + Sync + 'static {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Forget the stored token.
    fn clear(&self);
}
