//! Fixed glyphs and widths used by the markdown renderer.

/// Default cap, in pixels, handed to the inline-image encoder.
pub const DEFAULT_MAX_IMAGE_WIDTH: u32 = 500;

/// Image sources starting with this are downloaded before encoding.
pub const REMOTE_PREFIX: &str = "http";

// ---------------------------------------------------------------------------
// Block quotes / rules
// ---------------------------------------------------------------------------

pub const QUOTE_BAR: &str = "|";
pub const RULE_GLYPH: char = '─';
pub const RULE_WIDTH: usize = 80;

// ---------------------------------------------------------------------------
// Code panels
// ---------------------------------------------------------------------------

pub const CODE_TAB: &str = "  ";
pub const CODE_INDENT: &str = "  ";
/// Source characters kept per code line.
pub const CODE_MAX_LINE_CHARS: usize = 72;
/// Interior width of the shaded panel, indent included.
pub const CODE_PANEL_WIDTH: usize = 75;
pub const LINE_NUMBER_WIDTH: usize = 4;
