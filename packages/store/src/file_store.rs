//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the session token in a single file so native builds
//! (tooling, tests against a live backend) survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session_token      # raw token text
//! ```
//!
//! Use [`FileTokenStore::default_location`] for the platform data directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/fundlens/` |
//! | Linux | `~/.local/share/fundlens/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\fundlens\` |

use std::path::PathBuf;

use crate::token::{TokenStore, SESSION_TOKEN_KEY};

/// Filesystem-backed TokenStore.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store under `<data_dir>/fundlens`, falling back to the working directory.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fundlens");
        Self::new(base)
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(SESSION_TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("fundlens_token_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(dir.clone());
        assert!(store.get().is_none());

        store.set("token-123");

        // Re-open from same directory
        let reopened = FileTokenStore::new(dir.clone());
        assert_eq!(reopened.get().as_deref(), Some("token-123"));

        reopened.clear();
        assert!(store.get().is_none());

        // Clearing twice is harmless
        store.clear();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
