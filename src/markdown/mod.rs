//! Markdown-to-ANSI rendering.
//!
//! [`Renderer`] runs the ordered passes in [`passes`] over the input and
//! supplies the per-construct render rules. Every call to
//! [`Renderer::render`] owns its own [`TransientResources`], so remote
//! images staged during one call are deleted when that call returns and
//! concurrent calls never share state.

pub mod code_block;
pub mod heading;
pub mod passes;
pub mod settings;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use regex::Captures;
use tracing::debug;

use crate::config::Config;
use crate::fetch::{Fetch, HttpFetcher, TransientResources};
use crate::style;
use crate::terminal::{ImageEncoder, InlineImages, LinkEncoder, Osc8Links, PlainLinks};

use self::passes::{PassKind, RenderRule};
use self::settings::{DEFAULT_MAX_IMAGE_WIDTH, QUOTE_BAR, REMOTE_PREFIX, RULE_GLYPH, RULE_WIDTH};

/// Per-renderer options consulted during a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width cap, in pixels, passed to the image encoder.
    pub max_image_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_image_width: DEFAULT_MAX_IMAGE_WIDTH,
        }
    }
}

/// Converts markdown text into terminal-styled text.
pub struct Renderer {
    options: RenderOptions,
    fetcher: Box<dyn Fetch>,
    images: Box<dyn ImageEncoder>,
    links: Box<dyn LinkEncoder>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer {
    /// Renderer with the HTTP fetcher, iTerm2 images and OSC 8 links.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            fetcher: Box::new(HttpFetcher::default()),
            images: Box::new(InlineImages),
            links: Box::new(Osc8Links),
        }
    }

    /// Renderer configured from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        let mut fetcher = HttpFetcher::new(config.network.fetch_timeout_secs.map(Duration::from_secs));
        if let Some(dir) = &config.network.staging_dir {
            fetcher = fetcher.staging_dir(dir);
        }
        let renderer = Self::new(RenderOptions {
            max_image_width: config.render.max_image_width,
        })
        .with_fetcher(fetcher);
        if config.render.hyperlinks {
            renderer
        } else {
            renderer.with_links(PlainLinks)
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl Fetch + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn with_images(mut self, images: impl ImageEncoder + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    pub fn with_links(mut self, links: impl LinkEncoder + 'static) -> Self {
        self.links = Box::new(links);
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render `markdown` and return the trimmed result.
    ///
    /// Never fails: unmatched or malformed constructs pass through verbatim
    /// and unreachable images render as whatever the image encoder makes of
    /// an empty path. Staged temp files are gone by the time this returns.
    pub fn render(&self, markdown: &str) -> String {
        let mut run = RenderRun {
            renderer: self,
            resources: TransientResources::new(),
        };
        let out = passes::run_all(markdown, &mut run);
        if !run.resources.is_empty() {
            debug!("render finished, releasing {} staged file(s)", run.resources.len());
        }
        out
    }

    /// Render `markdown` and write it, newline-terminated, to `out`.
    pub fn write_to<W: Write>(&self, markdown: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render(markdown))
    }

    /// Render `markdown` to stdout.
    ///
    /// Write failures (e.g. a closed pipe) are logged and otherwise ignored.
    pub fn print(&self, markdown: &str) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = self.write_to(markdown, &mut lock).and_then(|()| lock.flush()) {
            debug!("stdout write failed: {e}");
        }
    }
}

/// Render `markdown` with default options and print it to stdout.
pub fn print(markdown: &str) {
    Renderer::default().print(markdown);
}

/// State for one render call.
struct RenderRun<'r> {
    renderer: &'r Renderer,
    resources: TransientResources,
}

impl RenderRun<'_> {
    fn render_image(&mut self, href: &str) -> String {
        let path = self.resolve_image(href);
        self.renderer
            .images
            .make_image(&path, self.renderer.options.max_image_width)
    }

    /// Local path for an image source, staging remote ones first.
    ///
    /// A failed fetch resolves to an empty path and registers nothing.
    fn resolve_image(&mut self, href: &str) -> PathBuf {
        if !is_remote(href) {
            return PathBuf::from(href);
        }
        match self.renderer.fetcher.fetch(href) {
            Ok(staged) => self.resources.register(staged),
            Err(e) => {
                debug!("image fetch failed for {href}: {e}");
                PathBuf::new()
            }
        }
    }
}

impl RenderRule for RenderRun<'_> {
    fn render(&mut self, kind: PassKind, caps: &Captures<'_>) -> Option<String> {
        let fragment = match kind {
            PassKind::AtxHeading => {
                let text = caps[3].trim();
                // Already-rendered headings keep their markers; leave them be.
                if text.starts_with('\x1b') {
                    return None;
                }
                heading::format_heading(caps[2].len(), text)
            }
            PassKind::SetextH1 => heading::format_heading(1, &caps[1]),
            PassKind::SetextH2 => heading::format_heading(2, &caps[1]),
            PassKind::Image => self.render_image(caps[2].trim()),
            PassKind::Link => self.renderer.links.make_link(&caps[1], caps[2].trim()),
            PassKind::Bold => style::bold(&caps[2]),
            PassKind::BlockQuote => format!(" {}{}", style::dim(QUOTE_BAR), &caps[2]),
            PassKind::ThematicBreak => style::dim(&RULE_GLYPH.to_string().repeat(RULE_WIDTH)),
            PassKind::BlankLines => "\n\n".to_string(),
            PassKind::CodeBlock => code_block::render_code_panel(&caps[1]),
        };
        Some(fragment)
    }
}

/// True when `href` would be downloaded rather than read from disk.
pub fn is_remote(href: &str) -> bool {
    href.starts_with(REMOTE_PREFIX)
}
