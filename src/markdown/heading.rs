//! Heading fragments.

use crate::style;

/// Render a heading of `level` (1..=6).
///
/// The `#` markers stay in the output next to the styled text, and the
/// fragment is wrapped in newlines so it stays apart from neighbouring
/// paragraphs. Level 1 is bold and underlined; every deeper level is plain
/// bold.
pub fn format_heading(level: usize, text: &str) -> String {
    let level = level.clamp(1, 6);
    let text = text.trim();
    let styled = if level == 1 {
        style::bold_underline(text)
    } else {
        style::bold(text)
    };
    format!("\n{} {}\n", "#".repeat(level), styled.trim())
}
