//! Regex extract-body: keep the body, drop scripts and metadata, and
//! re-wrap it in a minimal document shell.

use regex::Regex;
use std::sync::LazyLock;

static RE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body\b[^>]*>(.*?)</body\s*>").unwrap()
});
static RE_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap()
});
static RE_NOSCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<noscript\b[^>]*>.*?</noscript\s*>").unwrap()
});
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<link\b[^>]*>").unwrap());
static RE_META: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<meta\b[^>]*>").unwrap());
static RE_DOCUMENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:!doctype|html|head|body)\b").unwrap()
});
static RE_SVG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<svg\b[^>]*>.*?</svg\s*>").unwrap()
});

pub const SHELL_OPEN: &str = r#"<!DOCTYPE html><html><head><meta charset="UTF-8"></head><body>"#;
pub const SHELL_CLOSE: &str = "</body></html>";

/// Wrap a body fragment in the minimal document shell.
pub fn wrap_body(fragment: &str) -> String {
    let mut out = String::with_capacity(SHELL_OPEN.len() + fragment.len() + SHELL_CLOSE.len());
    out.push_str(SHELL_OPEN);
    out.push_str(fragment);
    out.push_str(SHELL_CLOSE);
    out
}

/// True when `html` has no doctype, `<html>`, `<head>` or `<body>` of its
/// own, so a parser would synthesize the document shell around it.
pub fn is_fragment(html: &str) -> bool {
    !RE_DOCUMENT_MARKER.is_match(html)
}

/// Returns the input unchanged when it has no `<body>...</body>`.
pub fn extract_body(html: &str) -> String {
    let Some(body) = RE_BODY.captures(html).and_then(|c| c.get(1)) else {
        return html.to_string();
    };
    let result = RE_SCRIPT.replace_all(body.as_str(), "");
    let result = RE_NOSCRIPT.replace_all(&result, "");
    let result = RE_LINK.replace_all(&result, "");
    let result = RE_META.replace_all(&result, "");
    let result = RE_SVG.replace_all(&result, "[SVG]");
    wrap_body(&result)
}
