//! Regex minify: comments and whitespace.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static RE_INTER_TAG_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static RE_MULTI_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[a-zA-Z][^<>]*>").unwrap());
static RE_ATTR_EQ: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*=\s*").unwrap());

/// Remove comments, keeping IE conditional comments (`<!--[if ...`).
pub fn strip_comments(html: &str) -> String {
    RE_COMMENT
        .replace_all(html, |caps: &Captures| {
            let comment = &caps[0];
            if comment.starts_with("<!--[if") {
                comment.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Collapse whitespace between tags and runs of whitespace elsewhere.
pub fn collapse_whitespace(html: &str) -> String {
    let result = RE_INTER_TAG_WS.replace_all(html, "><");
    RE_MULTI_WS.replace_all(&result, " ").into_owned()
}

/// Drop whitespace around `=` inside start tags.
pub fn tighten_attributes(html: &str) -> String {
    RE_TAG
        .replace_all(html, |caps: &Captures| RE_ATTR_EQ.replace_all(&caps[0], "=").into_owned())
        .into_owned()
}

/// Apply all minify passes. Comments go first so they leave no stray
/// whitespace behind.
pub fn minify(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let result = strip_comments(html);
    let result = collapse_whitespace(&result);
    let result = tighten_attributes(&result);
    result.trim().to_string()
}
