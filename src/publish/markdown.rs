//! Markdown rendering for stanza thoughts.

use pulldown_cmark::{Options, Parser, html};
use regex::Regex;

/// Replaces bare `<scheme://url>` occurrences with explicit anchors so
/// they survive the markdown pass as real links.
pub fn autolink(text: &str) -> String {
    let re = Regex::new(r"<([a-zA-Z][a-zA-Z0-9+.-]*://[^<>\s]+)>").unwrap();
    re.replace_all(text, r#"<a href="$1">$1</a>"#).into_owned()
}

/// Renders thoughts markdown to an HTML fragment.
pub fn to_html(thoughts: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let linked = autolink(thoughts);
    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(&linked, options));
    out
}
