//! Shared utility functions.

/// Shorten `s` for log output, keeping at most `max_chars` characters and
/// marking the cut with `...`.
///
/// Long base64 or word inputs are common; logging them whole is noise.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}
