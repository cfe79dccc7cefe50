// src/extract.rs
// Tolerant extraction of JSON from model replies

use serde::de::DeserializeOwned;
use tracing::warn;

/// Locate the JSON-looking span of a model reply.
///
/// Prefers the interior of a ```json fence, then a generic ``` fence.
/// Without a fence, falls back to the widest brace/bracket span so JSON
/// embedded in conversational prose still survives. Returns `None` when
/// the text holds nothing JSON-shaped at all.
pub fn json_candidate(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Look for ```json ... ``` blocks
    if let Some(start) = text.find("```json") {
        let start = start + 7;
        if let Some(end) = text[start..].find("```") {
            return Some(text[start..start + end].trim());
        }
    }

    // Look for ``` ... ``` blocks (generic code block)
    if let Some(start) = text.find("```") {
        let start = start + 3;
        // Skip a language identifier on the fence line if present
        let start = text[start..]
            .find('\n')
            .map(|i| start + i + 1)
            .unwrap_or(start);
        if let Some(end) = text[start..].find("```") {
            return Some(text[start..start + end].trim());
        }
    }

    // No fence: slice from the earliest opening brace/bracket to the
    // latest closing one, covering both object and array roots.
    let open = match (text.find('{'), text.find('[')) {
        (Some(brace), Some(bracket)) => Some(brace.min(bracket)),
        (brace, bracket) => brace.or(bracket),
    };
    let close = match (text.rfind('}'), text.rfind(']')) {
        (Some(brace), Some(bracket)) => Some(brace.max(bracket)),
        (brace, bracket) => brace.or(bracket),
    };

    match (open, close) {
        (Some(start), Some(end)) if start < end => Some(text[start..=end].trim()),
        _ => None,
    }
}

/// Decode a model reply into `T`, degrading to `default` on any failure.
///
/// Never panics and never errors: malformed output is logged and swallowed
/// so the pipeline always completes with a well-typed value.
pub fn parse_response<T: DeserializeOwned>(text: &str, default: T) -> T {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return default;
    }

    let Some(candidate) = json_candidate(trimmed) else {
        warn!(raw = trimmed, "no JSON candidate in model reply");
        return default;
    };

    match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, raw = trimmed, "failed to decode model reply");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_candidate_from_json_fence() {
        let text = "Here you go:\n```json\n{\"key\": \"value\"}\n```\nHope that helps!";
        assert_eq!(json_candidate(text), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_candidate_from_generic_fence() {
        let text = "```\n[1, 2, 3]\n```";
        assert_eq!(json_candidate(text), Some("[1, 2, 3]"));
    }

    #[test]
    fn test_candidate_from_prose_braces() {
        let text = "here is your data: {\"a\":1} thanks!";
        assert_eq!(json_candidate(text), Some("{\"a\":1}"));
    }

    #[test]
    fn test_candidate_array_root_in_prose() {
        let text = "Sure! [\"x\", \"y\"] - anything else?";
        assert_eq!(json_candidate(text), Some("[\"x\", \"y\"]"));
    }

    #[test]
    fn test_candidate_picks_widest_span() {
        // Multiple JSON-looking substrings collapse to the outermost span
        let text = "a {\"first\": 1} b {\"second\": 2} c";
        assert_eq!(json_candidate(text), Some("{\"first\": 1} b {\"second\": 2}"));
    }

    #[test]
    fn test_candidate_none_without_json() {
        assert_eq!(json_candidate("I cannot help with that."), None);
        assert_eq!(json_candidate(""), None);
        assert_eq!(json_candidate("   "), None);
    }

    #[test]
    fn test_parse_round_trip_through_fence() {
        let value = json!({"tags": ["a", "b"], "titles": ["T"]});
        let fenced = format!("```json\n{}\n```", value);
        let parsed: Value = parse_response(&fenced, Value::Null);
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_parse_idempotent_on_extracted_text() {
        let text = "Data: {\"a\": [1, 2]} done.";
        let first: Value = parse_response(text, Value::Null);
        let second: Value = parse_response(&first.to_string(), Value::Null);
        assert_eq!(first, second);
        assert_eq!(first, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_parse_braces_inside_string_literals() {
        let text = "note: {\"text\": \"use {curly} braces\"} end";
        let parsed: Value = parse_response(text, Value::Null);
        assert_eq!(parsed, json!({"text": "use {curly} braces"}));
    }

    #[test]
    fn test_parse_returns_default_on_garbage() {
        let parsed: Value = parse_response("I cannot help with that.", Value::Null);
        assert_eq!(parsed, Value::Null);

        // Braces present but not valid JSON - all-or-nothing, no recovery
        let parsed: Value = parse_response("{not json at all}", json!({"fallback": true}));
        assert_eq!(parsed, json!({"fallback": true}));
    }

    #[test]
    fn test_parse_empty_input_returns_default() {
        let parsed: Value = parse_response("", json!([]));
        assert_eq!(parsed, json!([]));
    }
}
