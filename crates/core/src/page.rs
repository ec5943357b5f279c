//! Page slug derivation, route building, tag handling and field validation.
//!
//! Pure functions only; the database crate calls these from its
//! build/validate/save pipeline and the API crate from its handlers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FieldErrors, ValidationError};

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Prefix every page route starts with.
pub const ROUTE_PREFIX: &str = "/wiki/";

/// Build the public route for a page slug.
pub fn route_for(url_title: &str) -> String {
    format!("{ROUTE_PREFIX}{url_title}")
}

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_OPEN: &str = "open";
pub const STATUS_CLOSED: &str = "closed";

/// Labels of the `enum_pages_status` database type, in declaration order.
pub const VALID_STATUSES: &[&str] = &[STATUS_OPEN, STATUS_CLOSED];

// ---------------------------------------------------------------------------
// Slug derivation
// ---------------------------------------------------------------------------

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex"));

/// Derive the `url_title` slug from a page title.
///
/// Each run of whitespace becomes a single underscore, any remaining
/// character outside `[A-Za-z0-9_]` is dropped, and the result is lowercased.
/// A title made only of punctuation yields an empty slug.
pub fn url_title_from(title: &str) -> String {
    let underscored = WHITESPACE_RE.replace_all(title.trim(), "_");
    NON_WORD_RE
        .replace_all(&underscored, "")
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Delimiter between tags in the stored `tags` string.
pub const TAG_DELIMITER: char = ',';

/// Characters stripped from both ends of every tag token.
///
/// Also passed to `btrim` by the similar-pages query, so SQL and Rust agree
/// on what a token is.
pub const TAG_PADDING: &str = " \t\n\r\x0C";

/// Trim [`TAG_PADDING`] from both ends of a single token.
pub fn trim_tag(token: &str) -> &str {
    token.trim_matches(|c| TAG_PADDING.contains(c))
}

/// Split a stored tag string into trimmed, non-empty, de-duplicated tokens.
pub fn split_tags(tags: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in tags.split(TAG_DELIMITER).map(trim_tag) {
        if !token.is_empty() && !out.iter().any(|t| t == token) {
            out.push(token.to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Check the required page fields.
///
/// Failures are reported in the order `title`, `url_title`, `content`.
/// `url_title` is only checked when a title is present, since an absent
/// title already explains the missing slug.
pub fn validate_page_fields(
    title: Option<&str>,
    url_title: Option<&str>,
    content: Option<&str>,
) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();

    if is_blank(title) {
        errors.push("title", "title must not be empty");
    } else if url_title.is_none_or(str::is_empty) {
        errors.push(
            "url_title",
            "title must contain at least one letter, digit or underscore",
        );
    }

    if is_blank(content) {
        errors.push("content", "content must not be empty");
    }

    errors.into_result()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
