//! ansimark: render markdown as ANSI-styled terminal text.
//!
//! A fixed subset of markdown (ATX and setext headings, bold, block quotes,
//! thematic breaks, fenced code, links and images) is rewritten by an ordered
//! series of search-and-replace passes into terminal escapes, including OSC 8
//! hyperlinks and iTerm2 inline images.
//!
//! # Quick start
//!
//! ```no_run
//! use ansimark::markdown::{RenderOptions, Renderer};
//!
//! let renderer = Renderer::new(RenderOptions { max_image_width: 400 });
//! let text = renderer.render("# Hello\n\nSome **bold** text.");
//! println!("{text}");
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod fetch;
pub mod markdown;
pub mod style;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod textutil;

pub use markdown::{print, RenderOptions, Renderer};
