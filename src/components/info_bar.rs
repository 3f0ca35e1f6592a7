//! Info Bar Component
//!
//! Completed/total summary shown under the board.

use leptos::prelude::*;

use crate::store::{use_notes_store, NotesStateStoreFields};

#[component]
pub fn InfoBar() -> impl IntoView {
    let store = use_notes_store();

    let summary = move || {
        let notes = store.notes().get();
        let completed = notes.iter().filter(|n| n.completed).count();
        format!("{completed} completed / {} total", notes.len())
    };

    view! {
        <div class="info-bar">
            <hr />
            <h3>{summary}</h3>
            <hr />
        </div>
    }
}
