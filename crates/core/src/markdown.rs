//! Markdown to HTML conversion for page content.
//!
//! `[[Title]]` and `[[Title|label]]` wiki links are rewritten into ordinary
//! markdown links to the target page's route before rendering.

use std::sync::LazyLock;

use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

use crate::page::{route_for, url_title_from};

static WIKI_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]|]+)(?:\|([^\[\]]+))?\]\]").expect("valid regex")
});

/// Rewrite wiki links into markdown links. Links whose title yields an
/// empty slug are left untouched.
pub fn expand_wiki_links(content: &str) -> String {
    WIKI_LINK_RE
        .replace_all(content, |caps: &Captures| {
            let target = caps[1].trim();
            let slug = url_title_from(target);
            if slug.is_empty() {
                return caps[0].to_string();
            }
            let label = caps.get(2).map_or(target, |m| m.as_str().trim());
            format!("[{label}]({})", route_for(&slug))
        })
        .into_owned()
}

/// Render page content to HTML.
pub fn render_markdown(content: &str) -> String {
    let expanded = expand_wiki_links(content);
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(&expanded, options);

    let mut out = String::with_capacity(expanded.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
