//! Default configuration constants.

use crate::markdown::settings;

/// Default inline-image width cap, shared with the renderer.
pub(super) const DEFAULT_MAX_IMAGE_WIDTH: u32 = settings::DEFAULT_MAX_IMAGE_WIDTH;
/// OSC 8 links are on unless disabled.
pub(super) const DEFAULT_HYPERLINKS: bool = true;
/// Config directory and file name under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "ansimark";
pub(super) const CONFIG_FILE_NAME: &str = "ansimark.toml";
