use thiserror::Error;

/// Failure taxonomy for one suggestion request.
///
/// Every variant ends up as a single `error` stream event at the HTTP
/// boundary; nothing here is retried.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The provider call failed (network, auth, rate limit, timeout).
    /// Carries the provider's payload opaquely.
    #[error("LLM provider request failed: {0}")]
    Upstream(String),

    /// The provider responded but no JSON could be recovered from the text.
    #[error("No valid JSON found in LLM response")]
    Extraction,

    /// Recovered JSON was not a top-level array.
    #[error("Invalid response format: expected array")]
    Shape,

    /// A suggestion record did not match its kind's schema.
    ///
    /// Only produced by the optional typed-decode step; the raw pipeline
    /// forwards array elements unchecked.
    #[error("suggestion record did not match schema: {0}")]
    Decode(String),
}
