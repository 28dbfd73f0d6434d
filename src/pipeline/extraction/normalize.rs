//! Text normalization for extracted documents.
//!
//! Downstream prompt size is bounded here: whitespace runs collapse to
//! single spaces and the result is capped at [`MAX_TEXT_CHARS`]
//! characters. Truncation is silent and avoids splitting a word when a
//! boundary exists near the cut.

/// Maximum characters of extracted text fed to the prompt builder.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Collapse all whitespace runs to a single space and trim the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate `text` to at most `max` characters, backing up to the
/// previous word boundary when the cut would land mid-word. Falls back
/// to a hard cut when the truncated span contains no space at all.
pub fn truncate_at_word_boundary(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    let next_is_boundary = text.chars().nth(max).is_some_and(char::is_whitespace);

    if next_is_boundary || cut.ends_with(char::is_whitespace) {
        return cut.trim_end().to_string();
    }

    match cut.rfind(' ') {
        Some(boundary) => cut[..boundary].trim_end().to_string(),
        None => cut,
    }
}

/// Full normalization policy: collapse, trim, bound.
pub fn normalize_extracted_text(raw: &str) -> String {
    truncate_at_word_boundary(&collapse_whitespace(raw), MAX_TEXT_CHARS)
}
