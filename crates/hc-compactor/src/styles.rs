//! Regex strip-styles: inline `style` attributes and `<style>` blocks.

use regex::Regex;
use std::sync::LazyLock;

static RE_STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+style\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap()
});
static RE_STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap()
});

pub fn strip_styles(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let result = RE_STYLE_ATTR.replace_all(html, "");
    RE_STYLE_BLOCK.replace_all(&result, "").into_owned()
}
