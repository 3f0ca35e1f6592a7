//! Note Form Component
//!
//! Form for creating new notes: name, description, submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::Note;
use crate::store::{dispatch, use_notes_store, NoteAction, NotesStateStoreFields};

/// Form for creating new notes
#[component]
pub fn NoteForm() -> impl IntoView {
    let store = use_notes_store();
    let config = expect_context::<ApiConfig>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let create_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Validation never reaches the network layer.
        if let Err(err) = store.with_untracked(|state| state.validate_draft()) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(err.message());
            }
            return;
        }

        let note = store.with_untracked(|state| {
            Note::new(
                state.draft_name.clone(),
                state.draft_description.clone(),
                state.client_id.clone(),
            )
        });

        // Insert optimistically; the feed echo is suppressed by clientId.
        dispatch(&store, NoteAction::Add(note.clone()));
        dispatch(&store, NoteAction::ResetDraft);

        let config = config.clone();
        spawn_local(async move {
            match api::create_note(&config, &note).await {
                Ok(created) => {
                    log::info!("[form] created note {}", created.id);
                    ctx.announce("note created");
                }
                Err(err) => log::error!("[form] create failed for {}: {err}", note.id),
            }
        });
    };

    view! {
        <form class="note-form" on:submit=create_note>
            <input
                type="text"
                placeholder="Enter note name"
                prop:value=move || store.draft_name().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    dispatch(&store, NoteAction::SetDraftName(input.value()));
                }
            />
            <input
                type="text"
                placeholder="Enter note description..."
                prop:value=move || store.draft_description().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    dispatch(&store, NoteAction::SetDraftDescription(input.value()));
                }
            />
            <button type="submit">"Create Note"</button>
        </form>
    }
}
