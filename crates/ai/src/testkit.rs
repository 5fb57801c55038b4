//! Scripted chat model for tests (enable the `testkit` feature).

use async_trait::async_trait;

use crate::error::InsightError;
use crate::llm::{ChatModel, DeltaSink};

/// A chat model that replays a canned outcome.
///
/// `replying` feeds the text through the delta sink in two halves so
/// consumers exercise their accumulation path.
pub struct MockChat {
    outcome: Result<String, String>,
}

impl MockChat {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl ChatModel for MockChat {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        _prompt: &str,
        on_delta: Option<&DeltaSink>,
    ) -> Result<String, InsightError> {
        match &self.outcome {
            Ok(text) => {
                if let Some(sink) = on_delta {
                    let mid = text.len() / 2;
                    // Split at a char boundary; canned replies are ASCII.
                    let (a, b) = text.split_at(mid);
                    sink(a);
                    sink(b);
                }
                Ok(text.clone())
            }
            Err(message) => Err(InsightError::Upstream(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_forwards_deltas_and_returns_full_text() {
        use std::sync::{Arc, Mutex};

        let model = MockChat::replying("[1,2,3]");
        let seen = Arc::new(Mutex::new(String::new()));
        let seen_in_sink = Arc::clone(&seen);
        let sink = move |s: &str| seen_in_sink.lock().unwrap().push_str(s);
        let sink: &DeltaSink = &sink;

        let full = model.generate("prompt", Some(sink)).await.unwrap();
        assert_eq!(full, "[1,2,3]");
        assert_eq!(*seen.lock().unwrap(), "[1,2,3]");
    }

    #[tokio::test]
    async fn mock_failure_surfaces_as_upstream_error() {
        let model = MockChat::failing("rate limited");
        let err = model.generate("prompt", None).await.unwrap_err();
        assert!(matches!(err, InsightError::Upstream(_)));
        assert!(err.to_string().contains("rate limited"));
    }
}
