//! Inline images via the iTerm2 `OSC 1337 ; File=` protocol.
//!
//! Also understood by WezTerm, Konsole and mintty. The terminal does the
//! decoding and scaling; we only ship the bytes and a width cap.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use super::ImageEncoder;

/// Emits `ESC ] 1337 ; File=inline=1;size=N;width=Wpx;preserveAspectRatio=1 : <base64> BEL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineImages;

impl ImageEncoder for InlineImages {
    fn make_image(&self, path: &Path, max_width: u32) -> String {
        if path.as_os_str().is_empty() {
            return String::new();
        }
        match std::fs::read(path) {
            Ok(bytes) => encode_inline_image(&bytes, max_width),
            Err(e) => {
                debug!("cannot read image {}: {e}", path.display());
                String::new()
            }
        }
    }
}

/// Build the escape sequence for raw image bytes.
pub fn encode_inline_image(bytes: &[u8], max_width: u32) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    format!(
        "\x1b]1337;File=inline=1;size={};width={max_width}px;preserveAspectRatio=1:{}\x07",
        bytes.len(),
        STANDARD.encode(bytes)
    )
}
