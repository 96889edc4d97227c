//! Response Extractor: recovers a single JSON object from free text returned
//! by a text-generation call that was asked for "only JSON".
//!
//! Strategies run in order and the first one that yields a JSON *object* wins:
//! 1. fenced code block (```` ```json ... ``` ````)
//! 2. balanced-brace scan over the control-character-stripped text
//! 3. naive slice from the first `{` to the last `}`
//!
//! Parse errors never escape; they only move on to the next strategy.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub type JsonObject = Map<String, Value>;

/// Upper bound on the raw-response excerpt kept for diagnostics, in characters.
pub const RAW_EXCERPT_CHARS: usize = 2000;

const FENCE: &str = "```";

/// Structured failure: why nothing parsed, plus enough of the input to debug it.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{reason}")]
pub struct ExtractionFailure {
    pub reason: String,
    pub raw_excerpt: String,
    /// Balanced-brace candidates that were tried and rejected.
    pub candidates_considered: usize,
}

type Strategy = fn(&str) -> Option<JsonObject>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("fenced_block", from_fenced_block),
    ("balanced_braces", from_balanced_braces),
    ("naive_slice", from_naive_slice),
];

/// Extracts the first JSON object found in `raw`.
pub fn extract_json_object(raw: &str) -> Result<JsonObject, ExtractionFailure> {
    for (name, strategy) in STRATEGIES {
        if let Some(object) = strategy(raw) {
            debug!(strategy = name, keys = object.len(), "extracted JSON object");
            return Ok(object);
        }
    }

    let cleaned = strip_control_chars(raw);
    let candidates_considered = balanced_candidates(&cleaned).len();
    let reason = if cleaned.contains('{') {
        "Failed to parse a JSON object from model response"
    } else {
        "No JSON object found in model response"
    };
    warn!(candidates_considered, "{reason}");

    Err(ExtractionFailure {
        reason: reason.to_string(),
        raw_excerpt: raw.chars().take(RAW_EXCERPT_CHARS).collect(),
        candidates_considered,
    })
}

fn parse_object(text: &str) -> Option<JsonObject> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Object(object) => Some(object),
        _ => None,
    }
}

/// Drops non-printable control characters, keeping newline, tab and carriage return.
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect()
}

fn from_fenced_block(raw: &str) -> Option<JsonObject> {
    let open = raw.find(FENCE)? + FENCE.len();
    let body = &raw[open..];
    let body = match body.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &body[4..],
        _ => body,
    };
    let close = body.find(FENCE)?;
    parse_object(body[..close].trim())
}

fn from_balanced_braces(raw: &str) -> Option<JsonObject> {
    let cleaned = strip_control_chars(raw);
    let candidates = balanced_candidates(&cleaned);
    debug!(candidates = candidates.len(), "balanced-brace scan");
    candidates.into_iter().find_map(parse_object)
}

fn from_naive_slice(raw: &str) -> Option<JsonObject> {
    let cleaned = strip_control_chars(raw);
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_object(&cleaned[start..=end])
}

/// Every maximal `{ ... }` span whose braces balance back to depth zero, in order
/// of appearance. Braces are counted literally, including inside strings.
fn balanced_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    candidates.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_fenced_json_block() {
        let raw = "```json\n{\"A\":\"1\"}\n```";
        assert_eq!(from_fenced_block(raw), Some(object(json!({"A": "1"}))));
        assert_eq!(extract_json_object(raw), Ok(object(json!({"A": "1"}))));
    }

    #[test]
    fn test_fenced_block_without_tag() {
        let raw = "Here you go:\n```\n{\"Role\": \"Editor\"}\n```\nEnjoy";
        assert_eq!(from_fenced_block(raw), Some(object(json!({"Role": "Editor"}))));
    }

    #[test]
    fn test_fenced_block_uppercase_tag() {
        let raw = "```JSON\n{\"A\": 1}\n```";
        assert_eq!(from_fenced_block(raw), Some(object(json!({"A": 1}))));
    }

    #[test]
    fn test_balanced_scan_picks_first_valid_candidate() {
        let raw = r#"Sure! Here is the result: {"A": "1"} Hope that helps {not json}"#;
        assert!(from_fenced_block(raw).is_none());
        assert_eq!(from_balanced_braces(raw), Some(object(json!({"A": "1"}))));
        assert_eq!(extract_json_object(raw), Ok(object(json!({"A": "1"}))));
    }

    #[test]
    fn test_balanced_scan_skips_invalid_leading_candidate() {
        let raw = r#"{draft} then {"Offer": "25% off"}"#;
        assert_eq!(
            extract_json_object(raw),
            Ok(object(json!({"Offer": "25% off"})))
        );
    }

    #[test]
    fn test_balanced_candidates_are_maximal() {
        let text = r#"x {"a": {"b": 1}} y {"c": 2} }"#;
        assert_eq!(
            balanced_candidates(text),
            vec![r#"{"a": {"b": 1}}"#, r#"{"c": 2}"#]
        );
    }

    #[test]
    fn test_invalid_fenced_block_falls_through() {
        let raw = "```json\n{broken}\n```\nActually: {\"A\": \"2\"}";
        assert_eq!(extract_json_object(raw), Ok(object(json!({"A": "2"}))));
    }

    #[test]
    fn test_control_characters_are_stripped() {
        let raw = "{\"A\":\u{0}\"1\"\u{7}}";
        assert_eq!(extract_json_object(raw), Ok(object(json!({"A": "1"}))));
    }

    #[test]
    fn test_newlines_inside_object_survive_cleaning() {
        let raw = "Result:\n{\n\t\"Format\": \"bullets\"\r\n}";
        assert_eq!(
            extract_json_object(raw),
            Ok(object(json!({"Format": "bullets"})))
        );
    }

    #[test]
    fn test_naive_slice_recovers_brace_inside_string() {
        let raw = r#"{"Output": "use } carefully"}"#;
        assert!(from_balanced_braces(raw).is_none());
        assert_eq!(
            from_naive_slice(raw),
            Some(object(json!({"Output": "use } carefully"})))
        );
        assert_eq!(
            extract_json_object(raw),
            Ok(object(json!({"Output": "use } carefully"})))
        );
    }

    #[test]
    fn test_top_level_array_is_not_accepted() {
        assert!(parse_object("[1, 2]").is_none());
        assert!(parse_object("\"text\"").is_none());
    }

    #[test]
    fn test_no_braces_is_a_failure() {
        let failure = extract_json_object("I cannot help with that.").unwrap_err();
        assert_eq!(failure.reason, "No JSON object found in model response");
        assert_eq!(failure.raw_excerpt, "I cannot help with that.");
        assert_eq!(failure.candidates_considered, 0);
    }

    #[test]
    fn test_unparseable_braces_report_candidate_count() {
        let failure = extract_json_object("{one} and {two}").unwrap_err();
        assert_eq!(
            failure.reason,
            "Failed to parse a JSON object from model response"
        );
        assert_eq!(failure.candidates_considered, 2);
    }

    #[test]
    fn test_raw_excerpt_is_bounded() {
        let raw = "ش".repeat(RAW_EXCERPT_CHARS + 500);
        let failure = extract_json_object(&raw).unwrap_err();
        assert_eq!(failure.raw_excerpt.chars().count(), RAW_EXCERPT_CHARS);
    }

    #[test]
    fn test_empty_input_is_a_failure() {
        assert!(extract_json_object("").is_err());
    }
}
