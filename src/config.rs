//! Backend Connection Settings
//!
//! Resolves the HTTP base URL and WebSocket feed URL, same-origin by
//! default with a localhost fallback for `trunk serve` style dev setups
//! where the API runs on its own port.

/// Where the managed notes API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub feed_url: String,
}

const DEV_API_ORIGIN: &str = "http://127.0.0.1:8787";

impl ApiConfig {
    /// Derive endpoints from the page origin. Falls back to the dev origin
    /// when not served over http(s).
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .filter(|o| o.starts_with("http"))
            .unwrap_or_else(|| DEV_API_ORIGIN.to_string());
        Self::from_origin(&origin)
    }

    fn from_origin(origin: &str) -> Self {
        Self {
            base_url: format!("{origin}/api"),
            feed_url: format!("{}/api/notes/feed", ws_origin(origin)),
        }
    }
}

/// Swap the scheme of an http(s) origin for the matching ws(s) one.
fn ws_origin(origin: &str) -> String {
    if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        origin.to_string()
    }
}
