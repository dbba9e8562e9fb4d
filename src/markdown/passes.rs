//! Ordered pattern table and the pass executor.
//!
//! Each pass finds every match of one construct in the current text and
//! substitutes a rendered fragment, handing its output to the next pass.
//!
//! ## Order
//!
//! The table order is load-bearing. Headings go first so later passes never
//! see raw `#` lines. Images must run before links because `![alt](src)`
//! contains `[alt](src)`. Blank-line collapsing runs after every pass that
//! inserts newlines, and code fences go last.
//!
//! ## Substitution
//!
//! A match is not replaced in place. Its (usually trimmed) text becomes a
//! search key and the rendered fragment replaces that literal text in the
//! whole document, so identical text elsewhere is rewritten too.
//! Line-oriented constructs (block quotes, rules and blank-line runs) are
//! instead replaced at the match location only, keeping any whitespace the
//! pattern captured around the search key.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Construct recognised by one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    AtxHeading,
    SetextH1,
    SetextH2,
    Image,
    Link,
    Bold,
    BlockQuote,
    ThematicBreak,
    BlankLines,
    CodeBlock,
}

/// Which text of a match is searched for when substituting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// Whole match with surrounding whitespace trimmed.
    Trimmed,
    /// Whole match as captured.
    Verbatim,
}

impl SearchKey {
    fn of(self, matched: &str) -> &str {
        match self {
            Self::Trimmed => matched.trim(),
            Self::Verbatim => matched,
        }
    }
}

/// Where the rendered fragment is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every literal occurrence of the search key.
    All,
    /// Only the matched span itself.
    Span,
}

/// One row of the pattern table.
#[derive(Debug)]
pub struct PatternEntry {
    pub kind: PassKind,
    pub pattern: &'static Lazy<Regex>,
    pub key: SearchKey,
    pub scope: Scope,
}

// Capture groups are documented on each pattern; render rules index them.

/// 2: markers, 3: text.
static ATX_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\n)(#{1,6})([^#\n][^\n]+)").unwrap());
/// 1: text.
static SETEXT_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(.+)\n=+$").unwrap());
/// 1: text.
static SETEXT_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(.+)\n-+$").unwrap());
/// 1: alt, 2: source.
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\[]*)\]\(([^)]+)\)").unwrap());
/// 1: text, 2: href.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[]+)\]\(([^)]+)\)").unwrap());
/// 2: text.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\*\*|__)([^*]+?)(\*\*|__)").unwrap());
/// 2: rest of line.
static BLOCK_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\n)>(.*)").unwrap());
static THEMATIC_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^-{5,}[ \t]*$").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n\n+").unwrap());
/// 1: body without fences.
static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[^`\n]*\n([\s\S]*?)\n```").unwrap());

/// Every pass, in execution order.
pub static PATTERN_TABLE: [PatternEntry; 10] = [
    PatternEntry {
        kind: PassKind::AtxHeading,
        pattern: &ATX_HEADING,
        key: SearchKey::Trimmed,
        scope: Scope::All,
    },
    PatternEntry {
        kind: PassKind::SetextH1,
        pattern: &SETEXT_H1,
        key: SearchKey::Trimmed,
        scope: Scope::All,
    },
    PatternEntry {
        kind: PassKind::SetextH2,
        pattern: &SETEXT_H2,
        key: SearchKey::Trimmed,
        scope: Scope::All,
    },
    PatternEntry {
        kind: PassKind::Image,
        pattern: &IMAGE,
        key: SearchKey::Trimmed,
        scope: Scope::All,
    },
    PatternEntry {
        kind: PassKind::Link,
        pattern: &LINK,
        key: SearchKey::Trimmed,
        scope: Scope::All,
    },
    PatternEntry {
        kind: PassKind::Bold,
        pattern: &BOLD,
        key: SearchKey::Verbatim,
        scope: Scope::All,
    },
    PatternEntry {
        kind: PassKind::BlockQuote,
        pattern: &BLOCK_QUOTE,
        key: SearchKey::Trimmed,
        scope: Scope::Span,
    },
    PatternEntry {
        kind: PassKind::ThematicBreak,
        pattern: &THEMATIC_BREAK,
        key: SearchKey::Trimmed,
        scope: Scope::Span,
    },
    PatternEntry {
        kind: PassKind::BlankLines,
        pattern: &BLANK_LINES,
        key: SearchKey::Verbatim,
        scope: Scope::Span,
    },
    PatternEntry {
        kind: PassKind::CodeBlock,
        pattern: &CODE_BLOCK,
        key: SearchKey::Verbatim,
        scope: Scope::All,
    },
];

/// Produces the fragment for one match.
pub trait RenderRule {
    /// Render `caps` for `kind`. `None` leaves the match untouched.
    fn render(&mut self, kind: PassKind, caps: &Captures<'_>) -> Option<String>;
}

/// Run one pass over `text`.
///
/// Matches are collected on `text` as it was when the pass started and are
/// handled left to right. A match whose search key has already been
/// substituted away is skipped without calling the render rule.
pub fn apply(text: &str, entry: &PatternEntry, rule: &mut impl RenderRule) -> String {
    if entry.scope == Scope::Span {
        return apply_in_place(text, entry, rule);
    }

    let mut out = text.to_string();
    for caps in entry.pattern.captures_iter(text) {
        let search = entry.key.of(caps.get(0).map_or("", |m| m.as_str()));
        if search.is_empty() || !out.contains(search) {
            continue;
        }
        let Some(replacement) = rule.render(entry.kind, &caps) else {
            continue;
        };
        out = out.replace(search, &replacement);
    }
    out
}

fn apply_in_place(text: &str, entry: &PatternEntry, rule: &mut impl RenderRule) -> String {
    let replaced = entry.pattern.replace_all(text, |caps: &Captures<'_>| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let Some(fragment) = rule.render(entry.kind, caps) else {
            return whole.to_string();
        };
        let (lead, trail) = match entry.key {
            SearchKey::Trimmed => {
                let lead = whole.len() - whole.trim_start().len();
                (&whole[..lead], &whole[lead + whole.trim().len()..])
            }
            SearchKey::Verbatim => ("", ""),
        };
        format!("{lead}{fragment}{trail}")
    });
    match replaced {
        Cow::Borrowed(unchanged) => unchanged.to_string(),
        Cow::Owned(changed) => changed,
    }
}

/// Run every pass in table order and trim the result.
pub fn run_all(text: &str, rule: &mut impl RenderRule) -> String {
    let mut out = text.to_string();
    for entry in &PATTERN_TABLE {
        out = apply(&out, entry, rule);
    }
    out.trim().to_string()
}
