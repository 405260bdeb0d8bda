use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Topic used when a broadcast request does not name one.
pub const DEFAULT_TOPIC: &str = "announcements";

/// Inbound broadcast request
///
/// `title` and `body` are optional on the wire so that their absence is a
/// validation failure rather than a deserialization failure; both must be
/// present and non-empty before anything is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub data: HashMap<String, String>,
    pub topic: Option<String>,
}

impl BroadcastRequest {
    /// The validated `(title, body)` pair, or `None` when either is
    /// missing or empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        match (self.title.as_deref(), self.body.as_deref()) {
            (Some(title), Some(body)) if !title.is_empty() && !body.is_empty() => {
                Some((title, body))
            }
            _ => None,
        }
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or(DEFAULT_TOPIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_present() {
        let req: BroadcastRequest =
            serde_json::from_str(r#"{"title": "Hi", "body": "There"}"#).unwrap();
        assert_eq!(req.required_fields(), Some(("Hi", "There")));
        assert_eq!(req.topic(), DEFAULT_TOPIC);
        assert!(req.data.is_empty());
    }

    #[test]
    fn test_required_fields_missing_or_empty() {
        let missing_body: BroadcastRequest = serde_json::from_str(r#"{"title": "Hi"}"#).unwrap();
        assert_eq!(missing_body.required_fields(), None);

        let empty_title: BroadcastRequest =
            serde_json::from_str(r#"{"title": "", "body": "There"}"#).unwrap();
        assert_eq!(empty_title.required_fields(), None);
    }

    #[test]
    fn test_topic_override() {
        let req: BroadcastRequest = serde_json::from_str(
            r#"{"title": "Hi", "body": "There", "topic": "match-updates", "data": {"k": "v"}}"#,
        )
        .unwrap();
        assert_eq!(req.topic(), "match-updates");
        assert_eq!(req.data.get("k").map(String::as_str), Some("v"));
    }
}
