//! Remote Note Store Bindings
//!
//! Typed async bindings for the managed notes API, organized by concern.
//! All requests go through the shared `fetch` plumbing below.

mod feed;
mod notes;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use feed::*;
pub use notes::*;

/// Perform one JSON request and hand back the raw response body.
async fn fetch_json(method: &str, url: &str, body: Option<String>) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("bad request for {url}: {e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("header error: {e:?}"))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{method} {url} failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;

    if !response.ok() {
        return Err(format!("{method} {url} returned HTTP {}", response.status()));
    }

    let text = JsFuture::from(response.text().map_err(|e| format!("body error: {e:?}"))?)
        .await
        .map_err(|e| format!("body error: {e:?}"))?;
    Ok(text.as_string().unwrap_or_default())
}
