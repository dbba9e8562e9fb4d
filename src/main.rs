//! CLI entry point for ansimark.

mod cli;

use std::io::Read;

use ansimark::config::{load_config, Config};
use ansimark::markdown::Renderer;
use ansimark::style;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEMO_DOCUMENT: &str = include_str!("../demos/sample.md");
const LOG_ENV: &str = "ANSIMARK_LOG";

fn main() {
    let args = cli::Args::parse();
    init_logging();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    apply_cli_overrides(&mut config, &args);
    style::set_color_enabled(config.display.color);

    let markdown = if args.demo {
        DEMO_DOCUMENT.to_string()
    } else {
        match read_input(&args) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    };

    Renderer::from_config(&config).print(&markdown);
}

fn init_logging() {
    // Logs go to stderr so stdout carries only the rendered document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(width) = args.max_image_width {
        config.render.max_image_width = width;
    }
    if args.no_color {
        config.display.color = false;
    }
    if args.no_hyperlinks {
        config.render.hyperlinks = false;
    }
}

fn read_input(args: &cli::Args) -> Result<String, String> {
    match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(text)
        }
    }
}
