//! Note List Component
//!
//! Displays the board with per-note complete/star/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::ApiConfig;
use crate::models::Note;
use crate::store::{dispatch, use_notes_store, NoteAction, NotesStateStoreFields};

use super::DeleteConfirmButton;

/// The note board list with loading and error states
#[component]
pub fn NoteList() -> impl IntoView {
    let store = use_notes_store();

    view! {
        <div class="note-list">
            <Show when=move || store.loading().get()>
                <p class="loading">"Loading notes..."</p>
            </Show>
            <Show when=move || store.error().get()>
                <p class="load-error">"Could not load notes from the server."</p>
            </Show>
            <ul class="notes">
                <For
                    each=move || store.notes().get()
                    key=|note| {
                        // Tuple of all fields the row renders, so any remote
                        // replacement re-renders the row
                        (
                            note.id.clone(),
                            note.completed,
                            note.starred,
                            note.name.clone(),
                            note.description.clone(),
                        )
                    }
                    children=move |note| view! { <NoteRow note=note /> }
                />
            </ul>
        </div>
    }
}

/// One row of the board
#[component]
fn NoteRow(note: Note) -> impl IntoView {
    let store = use_notes_store();
    let config = expect_context::<ApiConfig>();

    let completed = note.completed;
    let starred = note.starred;

    // Flip locally, then persist; a failure is logged and the UI keeps the
    // local value.
    let toggle_completed = {
        let config = config.clone();
        let id = note.id.clone();
        move |_| {
            dispatch(&store, NoteAction::ToggleCompleted(id.clone()));
            let config = config.clone();
            let id = id.clone();
            spawn_local(async move {
                match api::update_note(&config, &id, !completed).await {
                    Ok(_) => log::info!("[list] updated note {id}"),
                    Err(err) => log::error!("[list] update failed for {id}: {err}"),
                }
            });
        }
    };

    // Star is local-only; nothing to persist.
    let toggle_starred = {
        let id = note.id.clone();
        move |_| dispatch(&store, NoteAction::ToggleStarred(id.clone()))
    };

    let delete_note = {
        let config = config.clone();
        let id = note.id.clone();
        Callback::new(move |_: ()| {
            dispatch(&store, NoteAction::Remove(id.clone()));
            let config = config.clone();
            let id = id.clone();
            spawn_local(async move {
                match api::delete_note(&config, &id).await {
                    Ok(()) => log::info!("[list] deleted note {id}"),
                    Err(err) => log::error!("[list] delete failed for {id}: {err}"),
                }
            });
        })
    };

    view! {
        <li class="note-item" class:completed=completed class:starred=starred>
            <div class="note-main">
                <span class="note-name">
                    {note.name.clone()}
                    <Show when=move || completed>
                        <span class="completed-badge">"✓ Complete"</span>
                    </Show>
                </span>
                <span class="note-description">{note.description.clone()}</span>
            </div>
            <div class="note-actions">
                <button class="star-btn" on:click=toggle_starred>
                    {if starred { "★" } else { "☆" }}
                </button>
                <button class="toggle-btn" on:click=toggle_completed>
                    {if completed { "Unmark" } else { "Mark Complete" }}
                </button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=delete_note />
            </div>
        </li>
    }
}
