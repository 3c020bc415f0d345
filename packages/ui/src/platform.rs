//! Thin wrappers over the browser APIs the views need. Native builds get inert
//! fallbacks so the crate still compiles and tests off-browser.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// `window.location.origin`, e.g. `https://fund.example.com`.
pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// `window.location.hash`, including the leading `#`.
pub fn location_hash() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// `window.location.search`, including the leading `?`.
pub fn location_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// `window.location.pathname`.
pub fn location_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Rewrite the address bar without navigating or adding a history entry.
pub fn replace_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let replaced = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)));
        if !matches!(replaced, Some(Ok(()))) {
            tracing::warn!("could not rewrite the address bar to {}", url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("replace_url({}) ignored off-browser", url);
    }
}

/// Full-page navigation, used for external pages (OAuth consent, checkout).
pub fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("redirect to {} ignored off-browser", url);
    }
}

/// Blocking `window.confirm`. Always true off-browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
