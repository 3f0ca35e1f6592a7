//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod info_bar;
mod note_form;
mod note_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use info_bar::InfoBar;
pub use note_form::NoteForm;
pub use note_list::NoteList;
