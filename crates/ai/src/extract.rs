//! Best-effort recovery of a JSON value from free-form model text.
//!
//! Model output is not guaranteed well-formed: it may wrap the JSON in
//! markdown fences, prepend prose, leave trailing commas, or emit bare
//! object keys. This module handles exactly those malformations and gives
//! up otherwise; it is not a general lenient-JSON parser.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value as JsonValue;

use crate::error::InsightError;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\n?").expect("fence regex")
});

static TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*([}\]])").expect("trailing comma regex")
});

// Only quotes a bare key directly after `{` or `,`, so colon-adjacent words
// inside string values are left alone.
static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([,{]\s*)([A-Za-z_]\w*)\s*:"#).expect("bare key regex")
});

/// Recover a single top-level JSON value from raw model text.
///
/// Ordered algorithm, first success wins:
/// 1. Strip markdown code fences anywhere in the text.
/// 2. Take the first-`[`-to-last-`]` array span; if none, the
///    first-`{`-to-last-`}` object span. Arrays win the tie because every
///    suggestion contract is an array.
/// 3. Strict parse.
/// 4. Repaired parse: drop trailing commas, quote bare keys.
///
/// Pure and deterministic; calling it twice on the same text yields the
/// same result.
pub fn extract_json(raw: &str) -> Result<JsonValue, InsightError> {
    let stripped = FENCE.replace_all(raw, "");
    let clean = stripped.trim();

    let span = array_span(clean)
        .or_else(|| object_span(clean))
        .ok_or(InsightError::Extraction)?;

    if let Ok(value) = serde_json::from_str(span) {
        return Ok(value);
    }

    tracing::debug!("strict parse failed, attempting repaired parse");
    let repaired = repair(span);
    serde_json::from_str(&repaired).map_err(|_| InsightError::Extraction)
}

/// Greedy span from the first `[` to the last `]`.
fn array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Greedy span from the first `{` to the last `}`.
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn repair(span: &str) -> String {
    let no_trailing = TRAILING_COMMA.replace_all(span, "$1");
    BARE_KEY
        .replace_all(&no_trailing, "${1}\"${2}\":")
        .into_owned()
}
