//! Note Commands
//!
//! Frontend bindings for the note query and mutations.

use serde::Serialize;

use super::fetch_json;
use crate::config::ApiConfig;
use crate::models::Note;

#[derive(Serialize)]
struct UpdateNoteArgs {
    completed: bool,
}

/// Fetch every note in the store.
pub async fn list_notes(config: &ApiConfig) -> Result<Vec<Note>, String> {
    let raw = fetch_json("GET", &format!("{}/notes", config.base_url), None).await?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Persist a note this client constructed. The id and clientId travel with
/// the body; the backend assigns createdAt.
pub async fn create_note(config: &ApiConfig, note: &Note) -> Result<Note, String> {
    let body = serde_json::to_string(note).map_err(|e| e.to_string())?;
    let raw = fetch_json("POST", &format!("{}/notes", config.base_url), Some(body)).await?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Persist a completion change for one note.
pub async fn update_note(config: &ApiConfig, id: &str, completed: bool) -> Result<Note, String> {
    let body = serde_json::to_string(&UpdateNoteArgs { completed }).map_err(|e| e.to_string())?;
    let raw = fetch_json(
        "PATCH",
        &format!("{}/notes/{}", config.base_url, id),
        Some(body),
    )
    .await?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Ask the backend to delete the note with the given id.
pub async fn delete_note(config: &ApiConfig, id: &str) -> Result<(), String> {
    fetch_json("DELETE", &format!("{}/notes/{}", config.base_url, id), None).await?;
    Ok(())
}
