//! Regex strip-base64: replace embedded base64 data URIs with numbered
//! placeholders.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `src="data:image/...[;param=value]*;base64,..."`
static RE_SRC_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bsrc\s*=\s*(?:"data:image/[^";]*(?:;[^";,]*)*;base64,[^"]*"|'data:image/[^';]*(?:;[^';,]*)*;base64,[^']*')"#).unwrap()
});
/// CSS `url(data:image/...;base64,...)`
static RE_CSS_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(\s*["']?data:image/[^;)"']*(?:;[^;)"',]*)*;base64,[^)"']*["']?\s*\)"#).unwrap()
});
/// `srcset="... data:image/...;base64,... "`
static RE_SRCSET_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bsrcset\s*=\s*(?:"[^"]*data:image/[^"]*;base64,[^"]*"|'[^']*data:image/[^']*;base64,[^']*')"#).unwrap()
});
/// Any other `url(data:...;base64,...)`, e.g. fonts.
static RE_CSS_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(\s*["']?data:[^;)"']*(?:;[^;)"',]*)*;base64,[^)"']*["']?\s*\)"#).unwrap()
});

/// Replace base64 data URIs with `[IMG_N]` / `[DATA_N]`. Numbering starts at
/// 1 on every call and is shared by all four passes.
pub fn strip_base64(html: &str) -> String {
    strip_base64_counted(html).0
}

/// `strip_base64`, also returning how many placeholders were issued.
pub fn strip_base64_counted(html: &str) -> (String, usize) {
    if html.is_empty() {
        return (String::new(), 0);
    }
    let mut counter = 0usize;
    let mut next = || {
        counter += 1;
        counter
    };

    let result = RE_SRC_IMAGE.replace_all(html, |_: &Captures| format!("src=\"[IMG_{}]\"", next()));
    let result = RE_CSS_IMAGE.replace_all(&result, |_: &Captures| format!("url([IMG_{}])", next()));
    let result = RE_SRCSET_IMAGE.replace_all(&result, |_: &Captures| format!("srcset=\"[IMG_{}]\"", next()));
    let result = RE_CSS_DATA.replace_all(&result, |_: &Captures| format!("url([DATA_{}])", next()));
    let result = result.into_owned();
    (result, counter)
}
