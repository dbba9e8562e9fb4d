//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`ANSIMARK_MAX_IMAGE_WIDTH`,
//!    `ANSIMARK_FETCH_TIMEOUT_SECS`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./ansimark.toml in the current directory
//! 4. $XDG_CONFIG_HOME/ansimark/ansimark.toml (or ~/.config/ansimark/ansimark.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;

pub use loader::load_config;
pub use sources::config_root_dir;

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

use defaults::{DEFAULT_HYPERLINKS, DEFAULT_MAX_IMAGE_WIDTH};

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub network: NetworkConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Reject values the renderer cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.max_image_width == 0 {
            return Err(ConfigError::Invalid(
                "render.max_image_width must be a positive pixel count".to_string(),
            ));
        }
        if self.network.fetch_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "network.fetch_timeout_secs must be at least 1 (omit it for the client default)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Markdown rendering options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Width cap, in pixels, for inline images.
    pub max_image_width: u32,
    /// Emit OSC 8 hyperlinks; when false links print as `text (href)`.
    pub hyperlinks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_image_width: DEFAULT_MAX_IMAGE_WIDTH,
            hyperlinks: DEFAULT_HYPERLINKS,
        }
    }
}

/// Network/HTTP policy for remote images.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Timeout for image downloads; unset keeps the HTTP client default.
    pub fetch_timeout_secs: Option<u64>,
    /// Directory for downloaded images; unset uses the system temp dir.
    pub staging_dir: Option<PathBuf>,
}

/// Terminal display options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
