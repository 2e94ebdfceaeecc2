//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character, so values may contain `=`
/// - Trims whitespace from both key and value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

/// What: Remove a trailing ` # comment` from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Comment-free, trimmed value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URLs with
///   fragments or `//` stay intact.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let cut = s
        .char_indices()
        .find(|&(i, c)| c == '#' && i > 0 && s[..i].ends_with(char::is_whitespace))
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("base_url = x"));
    }

    #[test]
    /// What: Key/value split keeps everything after the first `=`.
    ///
    /// Inputs:
    /// - `"base_url = http://h/?a=b"`, `"= orphan"`, `"no equals"`
    ///
    /// Output:
    /// - First parses to the full URL; the other two are rejected.
    fn parse_key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_value("base_url = http://h/?a=b"),
            Some(("base_url".to_string(), "http://h/?a=b".to_string()))
        );
        assert_eq!(parse_key_value("= orphan"), None);
        assert_eq!(parse_key_value("no equals"), None);
    }

    #[test]
    fn strip_inline_comment_keeps_urls() {
        assert_eq!(
            strip_inline_comment("https://example.test/api # mirror"),
            "https://example.test/api"
        );
        assert_eq!(
            strip_inline_comment("https://example.test/#frag"),
            "https://example.test/#frag"
        );
        assert_eq!(strip_inline_comment("legacy"), "legacy");
    }
}
