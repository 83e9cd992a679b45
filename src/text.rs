//! Text processing for note content: escaping and URL linkification.

use regex::{Captures, Regex};
use std::sync::OnceLock;

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Linkification
// ============================================================================

fn url_pattern() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| Regex::new(r"https?://\S+").expect("URL pattern compiles"))
}

/// Wrap every `http://` / `https://` run of non-whitespace in an anchor that
/// opens in a new browsing context.
///
/// Expects already-escaped text: matches are inserted verbatim, so whatever
/// escaping the input carries ends up in both the `href` and the link text.
/// Trailing punctuation is part of the match.
pub fn linkify(text: &str) -> String {
    url_pattern()
        .replace_all(text, |caps: &Captures| {
            let url = &caps[0];
            format!(
                r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#,
                url = url
            )
        })
        .into_owned()
}

/// Escape first, then linkify. The only safe order for untrusted content.
pub fn render_content(content: &str) -> String {
    linkify(&html_escape(content))
}

/// All URL substrings `linkify` would wrap, in order.
pub fn find_urls(text: &str) -> Vec<&str> {
    url_pattern().find_iter(text).map(|m| m.as_str()).collect()
}
