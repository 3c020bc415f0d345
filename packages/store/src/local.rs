//! # localStorage token store — browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! It keeps the bearer token under [`SESSION_TOKEN_KEY`] in `window.localStorage`
//! so a reload restores the session.
//!
//! The struct is zero-sized and looks the storage object up on every call; the
//! browser hands back the same `Storage` each time. Errors (storage disabled,
//! quota exceeded, private mode) are swallowed and read as "no token".

use crate::token::{TokenStore, SESSION_TOKEN_KEY};

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(SESSION_TOKEN_KEY)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_TOKEN_KEY);
        }
    }
}
