use serde_json::Value as JsonValue;

use stocksense_ai::StreamEvent;

/// Per-kind display state, driven by stream events.
///
/// A refresh moves the machine to `Loading`, which clears prior data and
/// any error. `status` events keep it in `Loading`; the terminal event
/// moves it to `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InsightPhase {
    #[default]
    Idle,
    Loading,
    Success(Vec<JsonValue>),
    Error(String),
}

impl InsightPhase {
    /// Enter `Loading`, discarding previous data or error.
    pub fn begin(&mut self) {
        *self = InsightPhase::Loading;
    }

    /// Apply one stream event.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Status { message } => {
                tracing::debug!(%message, "progress update");
            }
            StreamEvent::Complete { data } => {
                *self = InsightPhase::Success(data);
            }
            StreamEvent::Error { error } => {
                let error = if error.is_empty() {
                    "Unknown error occurred".to_string()
                } else {
                    error
                };
                *self = InsightPhase::Error(error);
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InsightPhase::Success(_) | InsightPhase::Error(_))
    }
}
