//! Shared string helpers.

/// Shorten `s` for log lines: at most `max_chars` characters, with `...`
/// appended when something was cut off.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
