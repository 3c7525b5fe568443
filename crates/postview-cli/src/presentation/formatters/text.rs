/// Shorten `text` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// First line of a possibly multi-line string
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
