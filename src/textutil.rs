//! Character-count text helpers for fixed-width terminal panels.
//!
//! Widths are counted in `char`s, the single-cell approximation used across
//! the renderer. Byte slicing would panic when a cut lands inside a
//! multi-byte character.

/// Replace every tab with `replacement`.
pub fn expand_tabs(line: &str, replacement: &str) -> String {
    line.replace('\t', replacement)
}

/// Return a prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Right-pad `text` with spaces until it is `width` characters wide.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}
