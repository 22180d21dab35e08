//! Log truncation helpers
//!
//! Search responses carry full recipe payloads; debug logs only need a prefix.

/// Maximum number of characters kept in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Counts characters rather than bytes so multi-byte text (accented recipe
/// names, localized instructions) is never split inside a code point.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &s[..cut],
            s.len()
        ),
    }
}
