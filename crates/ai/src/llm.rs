//! Chat-model abstraction and the Groq streaming client.
//!
//! The provider speaks the OpenAI-compatible chat-completions protocol. We
//! always request a streamed response, accumulate the deltas server-side,
//! and hand the caller the full text; per-token relay to the browser is a
//! non-goal, the optional delta sink exists for logging and future use.

use async_trait::async_trait;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use crate::error::InsightError;

/// Observer for incremental text segments as the provider produces them.
pub type DeltaSink = dyn Fn(&str) + Send + Sync;

/// A chat-completion model the suggestion service can call.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Send one prompt, stream the response, return the full text.
    ///
    /// Each partial segment is forwarded to `on_delta` (when supplied)
    /// before being appended to the accumulator. No retries at this layer.
    async fn generate(
        &self,
        prompt: &str,
        on_delta: Option<&DeltaSink>,
    ) -> Result<String, InsightError>;
}

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Always respond with valid JSON when requested.";

/// Groq chat-completions client (streaming mode).
pub struct GroqChat {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GroqChat {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build from `GROQ_API_KEY` (required) and `GROQ_MODEL` (optional).
    pub fn from_env() -> Result<Self, InsightError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| InsightError::Upstream("GROQ_API_KEY is not set".to_string()))?;
        let model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Deserialize, Default)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ChatModel for GroqChat {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn generate(
        &self,
        prompt: &str,
        on_delta: Option<&DeltaSink>,
    ) -> Result<String, InsightError> {
        let request = Request {
            model: &self.model,
            stream: true,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| InsightError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the provider's error payload opaquely.
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Upstream(format!("{status}: {body}")));
        }

        let mut body = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut full_text = String::new();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| InsightError::Upstream(e.to_string()))?;
            buffer.extend_from_slice(&chunk);

            // Process complete lines; a partial line stays buffered so
            // multi-byte characters split across network chunks survive.
            while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line);
                let line = line.trim();

                let Some(payload) = line.strip_prefix("data: ") else {
                    continue;
                };
                if payload == "[DONE]" {
                    tracing::debug!(chars = full_text.len(), "provider stream complete");
                    return Ok(full_text);
                }

                match serde_json::from_str::<StreamChunk>(payload) {
                    Ok(chunk) => {
                        let content = chunk
                            .choices
                            .into_iter()
                            .next()
                            .and_then(|c| c.delta.content);
                        if let Some(text) = content {
                            if let Some(sink) = on_delta {
                                sink(&text);
                            }
                            full_text.push_str(&text);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed provider frame");
                    }
                }
            }
        }

        // Stream ended without [DONE]; whatever accumulated is the response.
        Ok(full_text)
    }
}
