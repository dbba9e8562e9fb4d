//! Terminal escape encoders for hyperlinks and inline images.
//!
//! The renderer only talks to these through the [`LinkEncoder`] and
//! [`ImageEncoder`] traits, so callers can swap in other terminal protocols
//! (or test doubles) without touching the pass pipeline.

pub mod hyperlink;
pub mod image;

use std::path::Path;

pub use hyperlink::{Osc8Links, PlainLinks};
pub use image::InlineImages;

// ---------------------------------------------------------------------------
// Encoder traits
// ---------------------------------------------------------------------------

/// Encodes a clickable link for the terminal.
pub trait LinkEncoder: Send + Sync {
    /// Render `text` as a link pointing at `href`.
    fn make_link(&self, text: &str, href: &str) -> String;
}

/// Encodes a local image file as an inline-image escape sequence.
pub trait ImageEncoder: Send + Sync {
    /// Render the image at `path` scaled to at most `max_width` pixels.
    ///
    /// An empty or unreadable path yields an empty string.
    fn make_image(&self, path: &Path, max_width: u32) -> String;
}
