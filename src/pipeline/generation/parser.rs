use serde_json::{json, Value};

use super::ParseError;

/// Title given to a quiz recovered through fallback wrapping.
pub const FALLBACK_TITLE: &str = "Generated Quiz";

/// Placeholder options attached to the fallback question.
pub const FALLBACK_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];

/// Outcome of parsing a completion response: either the JSON object the
/// service returned, or a degraded single-question wrapping of the raw
/// text. An explicit two-path result rather than exception-driven
/// control flow, so both branches are directly testable.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    Structured(Value),
    Fallback(Value),
}

impl ParsedResponse {
    /// The structured value, whichever path produced it.
    pub fn into_value(self) -> Value {
        match self {
            ParsedResponse::Structured(value) | ParsedResponse::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedResponse::Fallback(_))
    }
}

/// Locate and decode the JSON object embedded in `raw`.
///
/// Completion services often wrap the payload in prose, so the span
/// runs greedily from the first `{` through the last `}` rather than
/// assuming the JSON starts at offset 0. No partial recovery: a span
/// that fails to decode surfaces the raw text in the error.
pub fn extract_json_object(raw: &str) -> Result<Value, ParseError> {
    let start = raw.find('{').ok_or_else(|| ParseError::NoJsonObject {
        raw: raw.to_string(),
    })?;
    let end = raw
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| ParseError::NoJsonObject {
            raw: raw.to_string(),
        })?;

    serde_json::from_str(&raw[start..=end]).map_err(|e| ParseError::Decode {
        message: e.to_string(),
        raw: raw.to_string(),
    })
}

/// Strict decode, then fallback wrap.
///
/// The fallback trades correctness for a non-blocking flow: the entire
/// raw text becomes one open-ended question with four placeholder
/// options, so the caller still receives a usable quiz.
pub fn parse_or_fallback(raw: &str) -> ParsedResponse {
    match extract_json_object(raw) {
        Ok(value) => ParsedResponse::Structured(value),
        Err(e) => {
            tracing::warn!(error = %e, "completion response unparseable, wrapping raw text as fallback question");
            ParsedResponse::Fallback(fallback_quiz(raw))
        }
    }
}

fn fallback_quiz(raw: &str) -> Value {
    json!({
        "title": FALLBACK_TITLE,
        "questions": [{
            "id": "1",
            "question": raw,
            "type": "long",
            "options": FALLBACK_OPTIONS,
            "correctAnswer": FALLBACK_OPTIONS[0],
        }],
    })
}
