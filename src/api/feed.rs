//! Live Update Feed
//!
//! The backend pushes one JSON envelope per change over a single WebSocket,
//! covering the create/update/delete subscription channels.

use serde::Deserialize;

use crate::models::Note;

/// One pushed change from another client (or an echo of our own).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "note", rename_all = "lowercase")]
pub enum FeedEvent {
    Created(Note),
    Updated(Note),
    Deleted(Note),
}

/// Decode a feed frame.
pub fn parse_feed_event(raw: &str) -> Result<FeedEvent, String> {
    serde_json::from_str(raw).map_err(|e| format!("bad feed event: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = r#"{"id":"n1","name":"A","description":"d","completed":true,"clientId":"c1","createdAt":"2024-05-01T12:00:00Z"}"#;

    #[test]
    fn parses_each_event_kind() {
        let created = parse_feed_event(&format!(r#"{{"event":"created","note":{NOTE}}}"#)).unwrap();
        assert!(matches!(created, FeedEvent::Created(n) if n.id == "n1" && n.completed));

        let updated = parse_feed_event(&format!(r#"{{"event":"updated","note":{NOTE}}}"#)).unwrap();
        assert!(matches!(updated, FeedEvent::Updated(n) if n.client_id == "c1"));

        let deleted = parse_feed_event(&format!(r#"{{"event":"deleted","note":{NOTE}}}"#)).unwrap();
        assert!(matches!(deleted, FeedEvent::Deleted(n) if n.created_at.is_some()));
    }

    #[test]
    fn rejects_unknown_event_tags() {
        let err = parse_feed_event(&format!(r#"{{"event":"renamed","note":{NOTE}}}"#));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_malformed_frames() {
        assert!(parse_feed_event("not json").is_err());
        assert!(parse_feed_event(r#"{"event":"created"}"#).is_err());
    }
}
