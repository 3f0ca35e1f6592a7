//! Frontend Models
//!
//! Data structures matching the managed notes API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note record (matches the backend wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub name: String,
    pub description: String,
    pub completed: bool,
    /// Identifies which client instance created the note. Used to suppress
    /// the feed echo of this client's own creates.
    #[serde(rename = "clientId")]
    pub client_id: String,
    /// Assigned by the backend; absent on an optimistic local insert.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Local-only decoration. Never serialized, never persisted.
    #[serde(skip)]
    pub starred: bool,
}

impl Note {
    /// Build a fresh note for this session, ready to insert optimistically
    /// and send to the create endpoint.
    pub fn new(name: String, description: String, client_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            completed: false,
            client_id,
            created_at: None,
            starred: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_is_incomplete_and_unstamped() {
        let note = Note::new("a".into(), "b".into(), "client-1".into());
        assert!(!note.completed);
        assert!(!note.starred);
        assert!(note.created_at.is_none());
        assert_eq!(note.client_id, "client-1");
    }

    #[test]
    fn wire_format_uses_camel_case_and_omits_local_fields() {
        let note = Note::new("a".into(), "b".into(), "client-1".into());
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"clientId\":\"client-1\""));
        assert!(!json.contains("createdAt"));
        assert!(!json.contains("starred"));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let raw = r#"{"id":"n1","name":"A","description":"d","completed":false,"clientId":"c1"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert!(note.created_at.is_none());
        assert!(!note.starred);
    }
}
