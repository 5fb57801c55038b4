use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One message on the push channel between endpoint and browser.
///
/// Wire shape (inside an SSE `data:` frame):
/// - `{"type":"status","message":"..."}` — advisory progress, zero or more.
/// - `{"type":"complete","data":[...]}` — terminal, carries the suggestions.
/// - `{"type":"error","error":"..."}` — terminal, carries a description.
///
/// Exactly one terminal event ends every exchange; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    Status { message: String },
    Complete { data: Vec<JsonValue> },
    Error { error: String },
}

impl StreamEvent {
    /// A `complete` or `error` event closes the channel.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Complete { .. } | StreamEvent::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_event_wire_shape() {
        let event = StreamEvent::Status {
            message: "Analyzing pricing trends...".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "status", "message": "Analyzing pricing trends..."})
        );
    }

    #[test]
    fn complete_event_wire_shape() {
        let event = StreamEvent::Complete {
            data: vec![json!({"product_id": "PRD001"})],
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "complete", "data": [{"product_id": "PRD001"}]})
        );
    }

    #[test]
    fn error_event_round_trips() {
        let json = r#"{"type":"error","error":"rate limited"}"#;
        let event: StreamEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            StreamEvent::Error {
                error: "rate limited".to_string()
            }
        );
        assert!(event.is_terminal());
    }

    #[test]
    fn status_is_not_terminal() {
        let event = StreamEvent::Status {
            message: "working".to_string(),
        };
        assert!(!event.is_terminal());
    }
}
