//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a status message stays visible.
const STATUS_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transient status message shown under the list - read
    pub status: ReadSignal<Option<String>>,
    /// Transient status message - write
    set_status: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(status: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            status: status.0,
            set_status: status.1,
        }
    }

    /// Show a status message that dismisses itself after a few seconds.
    pub fn announce(&self, message: impl Into<String>) {
        let set_status = self.set_status;
        set_status.set(Some(message.into()));
        spawn_local(async move {
            TimeoutFuture::new(STATUS_MS).await;
            set_status.set(None);
        });
    }
}
