//! CLI argument parsing via clap.

use std::path::PathBuf;

use ansimark::build_info::{HELP_BUILD_METADATA, LONG_VERSION};
use clap::Parser;

/// Render markdown with terminal styling, hyperlinks and inline images.
#[derive(Debug, Parser)]
#[command(
    name = "ansimark",
    version,
    long_version = LONG_VERSION,
    after_help = HELP_BUILD_METADATA
)]
pub struct Args {
    /// Markdown file to render. Omit or pass `-` to read stdin.
    #[arg(conflicts_with = "demo")]
    pub file: Option<PathBuf>,

    /// Path to config file (default: ./ansimark.toml or ~/.config/ansimark/ansimark.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Maximum inline image width in pixels.
    #[arg(
        short = 'w',
        long = "max-image-width",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_image_width: Option<u32>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print links as `text (href)` instead of terminal hyperlinks.
    #[arg(long = "no-hyperlinks")]
    pub no_hyperlinks: bool,

    /// Render the bundled sample document.
    #[arg(long = "demo")]
    pub demo: bool,
}

impl Args {
    /// Input file, treating `-` as stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
