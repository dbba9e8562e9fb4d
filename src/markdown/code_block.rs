//! Fenced code blocks rendered as numbered, shaded panels.

use super::settings::{
    CODE_INDENT, CODE_MAX_LINE_CHARS, CODE_PANEL_WIDTH, CODE_TAB, LINE_NUMBER_WIDTH,
};
use crate::style;
use crate::textutil::{expand_tabs, pad_to_width, truncate_chars};

/// Render the body of a fenced block (fences and language tag excluded).
///
/// Output is a blank shaded border, one numbered row per source line, and
/// the same border again. Numbering starts at 1 for every block.
pub fn render_code_panel(body: &str) -> String {
    let border = panel_border();
    let mut out = String::with_capacity(border.len() * 2 + body.len() * 2);
    out.push_str(&border);
    for (idx, line) in body.split('\n').enumerate() {
        out.push('\n');
        out.push_str(&panel_row(idx + 1, line));
    }
    out.push('\n');
    out.push_str(&border);
    out
}

fn panel_row(number: usize, line: &str) -> String {
    let expanded = expand_tabs(line, CODE_TAB);
    let clipped = truncate_chars(&expanded, CODE_MAX_LINE_CHARS);
    let padded = pad_to_width(&format!("{CODE_INDENT}{clipped}"), CODE_PANEL_WIDTH);
    format!(
        "{number:>width$} {}",
        style::dim_background(&padded),
        width = LINE_NUMBER_WIDTH
    )
}

fn panel_border() -> String {
    format!(
        "{}{}",
        " ".repeat(LINE_NUMBER_WIDTH + 1),
        style::dim_background(&" ".repeat(CODE_PANEL_WIDTH))
    )
}
