//! Small shared helpers

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis when anything was cut. Used for log previews of prompts and
/// replies.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
