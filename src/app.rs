//! Noteboard Frontend App
//!
//! Root component: fetches the board once, opens the live feed, and
//! provides the store and connection settings to the tree.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use uuid::Uuid;

use leptos_livefeed::use_feed;

use crate::api::{self, FeedEvent};
use crate::components::{InfoBar, NoteForm, NoteList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{dispatch, NoteAction, NotesState};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_window();
    // Session identity: generated once, threaded through every create and
    // compared against every feed event.
    let client_id = Uuid::new_v4().to_string();
    let store = Store::new(NotesState::new(client_id.clone()));
    let (status, set_status) = signal(None::<String>);
    let ctx = AppContext::new((status, set_status));

    provide_context(store);
    provide_context(config.clone());
    provide_context(ctx);

    // Load notes on mount
    {
        let config = config.clone();
        Effect::new(move |_| {
            let config = config.clone();
            spawn_local(async move {
                match api::list_notes(&config).await {
                    Ok(notes) => {
                        log::info!("[app] fetched {} notes from server", notes.len());
                        dispatch(&store, NoteAction::NotesLoaded(notes));
                    }
                    Err(err) => {
                        log::error!("[app] initial load failed: {err}");
                        dispatch(&store, NoteAction::LoadFailed);
                    }
                }
            });
        });
    }

    // Live feed; the handle lives in the reactive owner and is released on
    // teardown.
    let _feed = use_feed(&config.feed_url, move |raw| {
        match api::parse_feed_event(&raw) {
            Ok(FeedEvent::Created(note)) => {
                if note.client_id == client_id {
                    // Echo of this client's own create
                    return;
                }
                log::info!("[feed] note {} created by another client", note.id);
                ctx.announce("a note was added by another client");
                dispatch(&store, NoteAction::RemoteCreated(note));
            }
            Ok(FeedEvent::Updated(note)) => {
                log::info!("[feed] note {} updated", note.id);
                dispatch(&store, NoteAction::RemoteUpdated(note));
            }
            Ok(FeedEvent::Deleted(note)) => {
                log::info!("[feed] note {} deleted", note.id);
                dispatch(&store, NoteAction::RemoteDeleted(note.id));
            }
            Err(err) => log::warn!("[feed] {err}"),
        }
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Noteboard"</h1>

                <NoteForm />

                <NoteList />

                <InfoBar />

                {move || ctx.status.get().map(|message| view! {
                    <p class="status-toast">{message}</p>
                })}
            </main>
        </div>
    }
}
