/// Truncate a span label to at most `max_chars` characters, keeping both
/// ends with an ellipsis in the middle.
///
/// Counts characters, not bytes, so multi-byte labels never split inside
/// a code point.
pub fn truncate_middle(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return "\u{2026}".to_string();
    }
    let keep = max_chars - 1; // one slot for the ellipsis
    let head = (keep + 1) / 2;
    let tail = keep / 2;
    let head_str: String = s.chars().take(head).collect();
    let tail_str: String = s.chars().skip(count - tail).collect();
    format!("{head_str}\u{2026}{tail_str}")
}

/// Compact fallback label: the first character of up to `max` words.
pub fn initials(s: &str, max: usize) -> String {
    s.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(max)
        .collect()
}
