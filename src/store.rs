//! Global Application State Store
//!
//! The view state is a single [`NotesState`] behind a reactive store. Every
//! transition goes through [`NotesState::apply`], which keeps the invariants
//! in one place: at most one note per id, newest first, and remote echoes of
//! this client's own creates suppressed.

use leptos::prelude::*;
use reactive_stores::Store;
use std::cmp::Ordering;

use crate::models::Note;

/// Hard cap on the board size; creates beyond it are rejected up front.
pub const MAX_NOTES: usize = 100;

/// View state for the note board
#[derive(Clone, Debug, Default, Store)]
pub struct NotesState {
    /// Generated once at session start; tags outgoing creates and filters
    /// incoming feed echoes.
    pub client_id: String,
    /// All notes, newest first
    pub notes: Vec<Note>,
    /// True until the initial fetch settles
    pub loading: bool,
    /// Set when the initial fetch fails; there is no retry
    pub error: bool,
    /// Draft form, name field
    pub draft_name: String,
    /// Draft form, description field
    pub draft_description: String,
}

/// Every transition the view state admits
#[derive(Clone, Debug)]
pub enum NoteAction {
    /// Initial fetch succeeded; replaces the collection
    NotesLoaded(Vec<Note>),
    /// Initial fetch failed
    LoadFailed,
    /// Optimistic local insert of a note this client created
    Add(Note),
    /// Local removal by id
    Remove(String),
    /// Flip `completed` by id
    ToggleCompleted(String),
    /// Flip the local-only star by id
    ToggleStarred(String),
    SetDraftName(String),
    SetDraftDescription(String),
    ResetDraft,
    /// Feed: a client created a note (may be our own echo)
    RemoteCreated(Note),
    /// Feed: a note changed; replaces the matching record
    RemoteUpdated(Note),
    /// Feed: a note was deleted
    RemoteDeleted(String),
}

/// Why a draft was rejected before dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingFields,
    BoardFull,
}

impl DraftError {
    pub fn message(&self) -> &'static str {
        match self {
            DraftError::MissingFields => "please enter a name and description",
            DraftError::BoardFull => "the board is full: delete a note before adding another",
        }
    }
}

impl NotesState {
    pub fn new(client_id: String) -> Self {
        Self {
            client_id,
            loading: true,
            ..Default::default()
        }
    }

    /// The reducer: apply one action to the state.
    pub fn apply(&mut self, action: NoteAction) {
        match action {
            NoteAction::NotesLoaded(mut notes) => {
                sort_newest_first(&mut notes);
                self.notes = notes;
                self.loading = false;
                self.error = false;
            }
            NoteAction::LoadFailed => {
                self.loading = false;
                self.error = true;
            }
            NoteAction::Add(note) => self.insert_front(note),
            NoteAction::RemoteCreated(note) => {
                // Feed echo of this client's own create carries our id.
                if note.client_id != self.client_id {
                    self.insert_front(note);
                }
            }
            NoteAction::Remove(id) | NoteAction::RemoteDeleted(id) => {
                self.notes.retain(|n| n.id != id);
            }
            NoteAction::ToggleCompleted(id) => {
                if let Some(note) = self.find_mut(&id) {
                    note.completed = !note.completed;
                }
            }
            NoteAction::ToggleStarred(id) => {
                if let Some(note) = self.find_mut(&id) {
                    note.starred = !note.starred;
                }
            }
            NoteAction::RemoteUpdated(note) => {
                if let Some(existing) = self.find_mut(&note.id) {
                    let starred = existing.starred;
                    *existing = note;
                    existing.starred = starred;
                }
            }
            NoteAction::SetDraftName(value) => self.draft_name = value,
            NoteAction::SetDraftDescription(value) => self.draft_description = value,
            NoteAction::ResetDraft => {
                self.draft_name.clear();
                self.draft_description.clear();
            }
        }
    }

    /// Check the draft before constructing a note. Rejections surface as a
    /// blocking alert and never reach the network layer.
    pub fn validate_draft(&self) -> Result<(), DraftError> {
        if self.draft_name.is_empty() || self.draft_description.is_empty() {
            return Err(DraftError::MissingFields);
        }
        if self.notes.len() >= MAX_NOTES {
            return Err(DraftError::BoardFull);
        }
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.notes.iter().filter(|n| n.completed).count()
    }

    fn insert_front(&mut self, note: Note) {
        if self.notes.iter().any(|n| n.id == note.id) {
            return;
        }
        self.notes.insert(0, note);
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }
}

/// Unstamped (optimistic) notes first, then newest by creation time.
fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => b.cmp(a),
    });
}

/// Type alias for the store
pub type NotesStore = Store<NotesState>;

/// Get the notes store from context
pub fn use_notes_store() -> NotesStore {
    expect_context::<NotesStore>()
}

/// Run one action against the store.
pub fn dispatch(store: &NotesStore, action: NoteAction) {
    store.write().apply(action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(id: &str, client_id: &str) -> Note {
        Note {
            id: id.to_string(),
            name: format!("note {id}"),
            description: "body".to_string(),
            completed: false,
            client_id: client_id.to_string(),
            created_at: None,
            starred: false,
        }
    }

    fn stamped(id: &str, secs: i64) -> Note {
        Note {
            created_at: Some(Utc.timestamp_opt(secs, 0).unwrap()),
            ..note(id, "peer")
        }
    }

    fn state_with(notes: Vec<Note>) -> NotesState {
        let mut state = NotesState::new("me".to_string());
        state.notes = notes;
        state.loading = false;
        state
    }

    #[test]
    fn load_replaces_notes_sorted_newest_first() {
        let mut state = NotesState::new("me".to_string());
        assert!(state.loading);

        state.apply(NoteAction::NotesLoaded(vec![
            stamped("old", 100),
            stamped("new", 300),
            note("unstamped", "me"),
            stamped("mid", 200),
        ]));

        let order: Vec<&str> = state.notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, vec!["unstamped", "new", "mid", "old"]);
        assert!(!state.loading);
        assert!(!state.error);
    }

    #[test]
    fn failed_load_sets_error_and_keeps_notes() {
        let mut state = NotesState::new("me".to_string());
        state.apply(NoteAction::LoadFailed);
        assert!(!state.loading);
        assert!(state.error);
        assert!(state.notes.is_empty());
    }

    #[test]
    fn add_prepends_and_dedupes_by_id() {
        let mut state = state_with(vec![note("a", "me")]);
        state.apply(NoteAction::Add(note("b", "me")));
        assert_eq!(state.notes[0].id, "b");

        state.apply(NoteAction::Add(note("b", "me")));
        assert_eq!(state.notes.len(), 2);
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let mut state = state_with(vec![note("a", "me"), note("b", "me"), note("c", "me")]);
        state.apply(NoteAction::Remove("b".to_string()));
        let order: Vec<&str> = state.notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, vec!["a", "c"]);
    }

    #[test]
    fn toggle_flips_only_completed_of_the_target() {
        let mut state = state_with(vec![note("a", "me"), note("b", "me")]);
        state.apply(NoteAction::ToggleCompleted("a".to_string()));

        assert!(state.notes[0].completed);
        assert_eq!(state.notes[0].name, "note a");
        assert!(!state.notes[1].completed);

        state.apply(NoteAction::ToggleCompleted("a".to_string()));
        assert!(!state.notes[0].completed);
    }

    #[test]
    fn own_feed_create_is_suppressed_peer_create_lands_in_front() {
        let mut state = state_with(vec![note("mine", "me")]);

        state.apply(NoteAction::RemoteCreated(note("echo", "me")));
        assert_eq!(state.notes.len(), 1);

        state.apply(NoteAction::RemoteCreated(note("theirs", "peer")));
        assert_eq!(state.notes[0].id, "theirs");
        assert_eq!(state.notes.len(), 2);
    }

    #[test]
    fn duplicate_feed_create_is_inserted_once() {
        let mut state = state_with(vec![]);
        state.apply(NoteAction::RemoteCreated(note("x", "peer")));
        state.apply(NoteAction::RemoteCreated(note("x", "peer")));
        assert_eq!(state.notes.len(), 1);
    }

    #[test]
    fn remote_update_replaces_by_id_but_keeps_local_star() {
        let mut state = state_with(vec![note("a", "peer")]);
        state.apply(NoteAction::ToggleStarred("a".to_string()));
        assert!(state.notes[0].starred);

        let mut updated = note("a", "peer");
        updated.name = "renamed".to_string();
        updated.completed = true;
        state.apply(NoteAction::RemoteUpdated(updated));

        assert_eq!(state.notes[0].name, "renamed");
        assert!(state.notes[0].completed);
        assert!(state.notes[0].starred);
    }

    #[test]
    fn remote_update_for_unknown_id_is_a_no_op() {
        let mut state = state_with(vec![note("a", "peer")]);
        state.apply(NoteAction::RemoteUpdated(note("ghost", "peer")));
        assert_eq!(state.notes.len(), 1);
        assert_eq!(state.notes[0].id, "a");
    }

    #[test]
    fn draft_validation_requires_both_fields() {
        let mut state = state_with(vec![]);
        assert_eq!(state.validate_draft(), Err(DraftError::MissingFields));

        state.apply(NoteAction::SetDraftName("groceries".to_string()));
        assert_eq!(state.validate_draft(), Err(DraftError::MissingFields));

        state.apply(NoteAction::SetDraftDescription("milk, eggs".to_string()));
        assert_eq!(state.validate_draft(), Ok(()));
    }

    #[test]
    fn draft_validation_rejects_a_full_board() {
        let notes = (0..MAX_NOTES).map(|i| note(&format!("n{i}"), "me")).collect();
        let mut state = state_with(notes);
        state.apply(NoteAction::SetDraftName("one more".to_string()));
        state.apply(NoteAction::SetDraftDescription("over the cap".to_string()));
        assert_eq!(state.validate_draft(), Err(DraftError::BoardFull));
    }

    #[test]
    fn reset_clears_both_draft_fields() {
        let mut state = state_with(vec![]);
        state.apply(NoteAction::SetDraftName("a".to_string()));
        state.apply(NoteAction::SetDraftDescription("b".to_string()));
        state.apply(NoteAction::ResetDraft);
        assert!(state.draft_name.is_empty());
        assert!(state.draft_description.is_empty());
    }

    #[test]
    fn completed_count_tracks_toggles() {
        let mut state = state_with(vec![note("a", "me"), note("b", "me"), note("c", "me")]);
        assert_eq!(state.completed_count(), 0);
        state.apply(NoteAction::ToggleCompleted("a".to_string()));
        state.apply(NoteAction::ToggleCompleted("c".to_string()));
        assert_eq!(state.completed_count(), 2);
    }
}
