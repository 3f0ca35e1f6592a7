//! Leptos LiveFeed Utilities
//!
//! Scoped WebSocket subscriptions for Leptos CSR apps. A [`FeedSocket`]
//! owns its event callbacks and unhooks them when dropped, so a feed
//! acquired inside a component is released on teardown no matter how the
//! component exits.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

/// An open feed connection delivering text frames to a handler.
///
/// The socket stays subscribed for as long as the handle is alive. Dropping
/// the handle clears every callback and closes the connection.
pub struct FeedSocket {
    ws: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_open: Closure<dyn FnMut(web_sys::Event)>,
    _on_error: Closure<dyn FnMut(ErrorEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl FeedSocket {
    /// Open a feed at `url` and invoke `on_message` for every text frame.
    ///
    /// Binary frames are dropped with a warning.
    pub fn connect(url: &str, on_message: impl Fn(String) + 'static) -> Result<Self, String> {
        let ws = WebSocket::new(url).map_err(|e| format!("failed to open feed at {url}: {e:?}"))?;

        let message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
            match ev.data().as_string() {
                Some(text) => on_message(text),
                None => log::warn!("[livefeed] dropping non-text frame"),
            }
        });
        ws.set_onmessage(Some(message.as_ref().unchecked_ref()));

        let open_url = url.to_string();
        let open = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            log::info!("[livefeed] connected to {open_url}");
        });
        ws.set_onopen(Some(open.as_ref().unchecked_ref()));

        let error = Closure::<dyn FnMut(ErrorEvent)>::new(move |ev: ErrorEvent| {
            log::error!("[livefeed] socket error: {}", ev.message());
        });
        ws.set_onerror(Some(error.as_ref().unchecked_ref()));

        let close = Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
            log::warn!("[livefeed] closed (code {})", ev.code());
        });
        ws.set_onclose(Some(close.as_ref().unchecked_ref()));

        Ok(Self {
            ws,
            _on_message: message,
            _on_open: open,
            _on_error: error,
            _on_close: close,
        })
    }

    /// The URL this socket is connected to.
    pub fn url(&self) -> String {
        self.ws.url()
    }
}

impl Drop for FeedSocket {
    fn drop(&mut self) {
        // Unhook callbacks before closing so the close event does not fire
        // into a dropped closure.
        self.ws.set_onmessage(None);
        self.ws.set_onopen(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}

/// Open a feed tied to the current reactive owner.
///
/// The socket is stored in the owner's arena and released on cleanup, so a
/// component can subscribe without managing teardown by hand. A connection
/// failure is logged and yields an empty handle.
pub fn use_feed(
    url: &str,
    on_message: impl Fn(String) + 'static,
) -> StoredValue<Option<FeedSocket>, LocalStorage> {
    let handle = match FeedSocket::connect(url, on_message) {
        Ok(socket) => StoredValue::new_local(Some(socket)),
        Err(err) => {
            log::error!("[livefeed] {err}");
            StoredValue::new_local(None)
        }
    };
    on_cleanup(move || handle.set_value(None));
    handle
}
