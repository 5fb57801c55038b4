use serde::{Deserialize, Serialize};

/// The three suggestion categories the dashboard offers.
///
/// A kind determines the prompt template, the progress message sent before
/// the model call, the fallback error string, and the record schema of the
/// result array. Everything else in the pipeline is kind-agnostic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Restock,
    Price,
    Trending,
}

impl SuggestionKind {
    pub const ALL: [SuggestionKind; 3] = [
        SuggestionKind::Restock,
        SuggestionKind::Price,
        SuggestionKind::Trending,
    ];

    /// Route path segment under `/api/ai/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            SuggestionKind::Restock => "restock",
            SuggestionKind::Price => "price",
            SuggestionKind::Trending => "trending",
        }
    }

    /// Advisory progress message emitted before the model call.
    pub fn status_message(self) -> &'static str {
        match self {
            SuggestionKind::Restock => "Analyzing inventory levels...",
            SuggestionKind::Price => "Analyzing pricing trends...",
            SuggestionKind::Trending => "Analyzing sales trends...",
        }
    }

    /// Error string used when a failure carries no message of its own.
    pub fn fallback_error(self) -> &'static str {
        match self {
            SuggestionKind::Restock => "Failed to get restock suggestions",
            SuggestionKind::Price => "Failed to get price optimization suggestions",
            SuggestionKind::Trending => "Failed to get trending product suggestions",
        }
    }
}

impl core::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path_segment())
    }
}
