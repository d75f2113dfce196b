//! String utilities for the domain layer.

/// Shorten `s` to at most `max_chars` characters, marking the cut with `...`.
///
/// Counts characters, not bytes, so summary lines line up for non-ASCII
/// answers too.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut short: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
