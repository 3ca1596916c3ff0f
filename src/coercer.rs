//! Response coercion: normalizing raw model output into caller shapes.
//!
//! Free-text responses pass through nearly untouched; structured responses
//! get fence-stripping and bracket-slicing fallbacks before JSON parsing.
//! Parse failures surface as a typed error instead of an empty list, so
//! callers can tell "model returned nothing" from "model returned garbage".

use crate::log_debug;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

/// Placeholder returned when the model produced an empty free-text body
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "Error: No content generated.";

/// Bound on how much offending text an error message carries
const PREVIEW_LIMIT: usize = 200;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("Failed to compile fenced block pattern")
});

/// Structured-response coercion error
#[derive(Debug, thiserror::Error)]
pub enum CoercionError {
    #[error("Structured response is not valid JSON ({source}); response started with: {preview}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        preview: String,
    },
}

/// Coerce a free-text document response.
///
/// Returns the trimmed text, or the literal placeholder when the response
/// body is empty.
pub fn coerce_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        EMPTY_CONTENT_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Coerce a structured response into an ordered sequence of records.
///
/// Already-clean JSON parses directly, so coercion is idempotent on it.
/// Otherwise fenced-code markers are stripped and, as a last resort, the
/// outermost `[` .. `]` span is sliced out before parsing.
pub fn coerce_json_array<T>(raw: &str) -> Result<Vec<T>, CoercionError>
where
    T: DeserializeOwned,
{
    if let Ok(parsed) = serde_json::from_str::<Vec<T>>(raw) {
        return Ok(parsed);
    }

    log_debug!("Direct JSON parse failed, stripping formatting");
    let cleaned = strip_fences(raw);
    if let Ok(parsed) = serde_json::from_str::<Vec<T>>(&cleaned) {
        return Ok(parsed);
    }

    let sliced = slice_array(&cleaned);
    serde_json::from_str::<Vec<T>>(sliced).map_err(|e| {
        log_debug!("All JSON parse attempts failed: {}", e);
        CoercionError::InvalidJson {
            source: e,
            preview: raw.chars().take(PREVIEW_LIMIT).collect(),
        }
    })
}

/// Remove surrounding fenced-code markers (``` with an optional json tag)
fn strip_fences(raw: &str) -> String {
    if let Some(captures) = FENCED_BLOCK.captures(raw)
        && let Some(inner) = captures.get(1)
    {
        return inner.as_str().trim().to_string();
    }

    // Unterminated fence: drop the opening marker line and trailing ticks
    let trimmed = raw.trim();
    let without_start = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_end = without_start.strip_suffix("```").unwrap_or(without_start);
    without_end.trim().to_string()
}

/// Slice the outermost JSON array span out of surrounding prose
fn slice_array(text: &str) -> &str {
    let Some(start) = text.find('[') else {
        return text;
    };
    let end = text.rfind(']').map_or(text.len(), |i| i + 1);
    if start < end { &text[start..end] } else { text }
}
