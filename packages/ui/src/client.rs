//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageTokenStore`],
//!   base URL resolved against the page origin when none is configured
//! - **Native**: filesystem via [`store::FileTokenStore`], default backend
//!   `http://localhost:8000`

use std::sync::Arc;

use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_DEFAULT_BACKEND: &str = "http://localhost:8000";

/// Client configuration for this build.
///
/// The web build uses the values baked in at compile time. Native builds read
/// `fundlens.toml` from the working directory when present.
pub fn load_config() -> ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = std::path::Path::new(ClientConfig::filename());
        if let Ok(text) = std::fs::read_to_string(path) {
            match ClientConfig::from_toml(&text) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("ignoring invalid {}: {}", path.display(), e),
            }
        }
    }
    ClientConfig::from_build_env()
}

/// Create a platform-appropriate client for `config`.
pub fn make_client(config: &ClientConfig) -> ApiClient {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let base = config.api_base_for_origin(&crate::platform::origin());
        ApiClient::new(base, Arc::new(store::LocalStorageTokenStore::new()))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let base = config.api_base_for_origin(&crate::platform::origin());
        ApiClient::new(base, Arc::new(store::MemoryTokenStore::new()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = config.api_base_for_origin(NATIVE_DEFAULT_BACKEND);
        ApiClient::new(base, Arc::new(store::FileTokenStore::default_location()))
    }
}

/// The client provided by the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The configuration the client was built from.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
