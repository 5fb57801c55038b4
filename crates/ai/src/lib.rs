//! `stocksense-ai`
//!
//! **Responsibility:** the merchandising-insight pipeline.
//!
//! This crate turns static catalog data into AI-generated suggestions:
//! prompt building, the chat-model adapter (streaming), best-effort JSON
//! extraction from model text, and the suggestion service that composes them.
//!
//! It deliberately does **not** know about HTTP routing: the stream-event
//! protocol type lives here because both the server and the consumer speak
//! it, but transport framing belongs to `stocksense-api` / `stocksense-client`.

pub mod error;
pub mod event;
pub mod extract;
pub mod kind;
pub mod llm;
pub mod prompt;
pub mod records;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use error::InsightError;
pub use event::StreamEvent;
pub use extract::extract_json;
pub use kind::SuggestionKind;
pub use llm::{ChatModel, DeltaSink, GroqChat};
pub use prompt::build_prompt;
pub use records::{
    DecodedSuggestions, GrowthPotential, PriceOptimization, RestockSuggestion, TrendingProduct,
    Urgency,
};
pub use service::SuggestionService;
