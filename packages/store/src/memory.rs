use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.set("def");
        assert_eq!(store.get().as_deref(), Some("def"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryTokenStore::with_token("shared");
        let other = store.clone();
        other.clear();
        assert!(store.get().is_none());
    }
}
