//! Terminal styling primitives.
//!
//! Every function wraps its input in ANSI escapes and ends with a reset, so
//! fragments can be spliced into surrounding text without leaking style.

use crossterm::style::{Color, Stylize};

/// Bright-white bold text.
pub fn bold(s: &str) -> String {
    s.with(Color::White).bold().to_string()
}

/// Underlined text.
pub fn underline(s: &str) -> String {
    s.underlined().to_string()
}

/// Bright-white, bold and underlined text.
pub fn bold_underline(s: &str) -> String {
    underline(&bold(s))
}

/// Dark-grey foreground, used for quote bars and rules.
pub fn dim(s: &str) -> String {
    s.with(Color::DarkGrey).to_string()
}

/// Dark-grey background with bright-white text, used for code panels.
pub fn dim_background(s: &str) -> String {
    s.on(Color::DarkGrey).with(Color::White).to_string()
}

/// Globally enable or disable color escapes (attributes are unaffected).
pub fn set_color_enabled(enabled: bool) {
    crossterm::style::force_color_output(enabled);
}
