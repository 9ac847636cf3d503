//! Text processing utilities.
//!
//! Helpers that turn raw post fields into single-line display text.

use chrono::DateTime;
use log::*;
use regex::Regex;

/// Collapse runs of whitespace, newlines included, into single spaces.
///
pub fn collapse_whitespace(text: &str) -> String {
    match Regex::new(r"\s+") {
        Ok(re) => re.replace_all(text.trim(), " ").to_string(),
        Err(e) => {
            warn!("Failed to compile whitespace pattern: {}", e);
            text.trim().to_string()
        }
    }
}

/// Return a one-line excerpt of at most `max_chars` characters, ending in
/// an ellipsis when the text was cut.
///
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Format an RFC 3339 timestamp for the post list. Unparseable values are
/// shown as they are.
///
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_joins_lines() {
        assert_eq!(collapse_whitespace("  one\n\ntwo\t three "), "one two three");
    }

    #[test]
    fn excerpt_keeps_short_text() {
        assert_eq!(excerpt("short body", 20), "short body");
    }

    #[test]
    fn excerpt_cuts_long_text() {
        let result = excerpt("abcdefghij", 5);
        assert_eq!(result, "abcd…");
        assert_eq!(result.chars().count(), 5);
    }

    #[test]
    fn format_timestamp_parses_rfc3339() {
        assert_eq!(
            format_timestamp("2021-06-01T12:30:00.000Z"),
            "2021-06-01 12:30"
        );
    }

    #[test]
    fn format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
