//! Escaping helpers for the handful of places that build HTML outside
//! the markdown renderer (badges, titles, href attributes).

use pulldown_cmark_escape::{escape_href, escape_html};

pub fn escape(text: &str) -> String {
    let mut out = String::new();
    let _ = escape_html(&mut out, text);
    out
}

pub fn escape_attr(url: &str) -> String {
    let mut out = String::new();
    let _ = escape_href(&mut out, url);
    out
}
