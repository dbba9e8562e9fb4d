//! OSC 8 hyperlinks.

use super::LinkEncoder;

const OSC: &str = "\x1b]";
const ST: &str = "\x1b\\";

/// Emits `ESC ] 8 ;; href ESC \ text ESC ] 8 ;; ESC \`.
///
/// Terminals without OSC 8 support drop the escapes and show `text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Osc8Links;

impl LinkEncoder for Osc8Links {
    fn make_link(&self, text: &str, href: &str) -> String {
        format!("{OSC}8;;{href}{ST}{text}{OSC}8;;{ST}")
    }
}

/// Fallback for terminals that print OSC 8 literally: `text (href)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLinks;

impl LinkEncoder for PlainLinks {
    fn make_link(&self, text: &str, href: &str) -> String {
        format!("{text} ({href})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc8_wraps_text_with_open_and_close_sequences() {
        let out = Osc8Links.make_link("Google", "http://google.de");
        assert_eq!(
            out,
            "\x1b]8;;http://google.de\x1b\\Google\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn plain_links_show_href_in_parentheses() {
        assert_eq!(
            PlainLinks.make_link("docs", "https://x.dev"),
            "docs (https://x.dev)"
        );
    }
}
