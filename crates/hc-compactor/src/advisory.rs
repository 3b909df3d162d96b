//! Size-based advisory: method recommendation, token estimates and size
//! warnings.

use hc_core::{CompactionMethod, RecommendationConfig, WarningConfig};
use std::sync::LazyLock;

static DEFAULT_RECOMMENDATION: LazyLock<RecommendationConfig> =
    LazyLock::new(RecommendationConfig::default);

/// Recommend a method for an input of `size` bytes using the default table:
/// below 30K `none`, 50K `regex-minify`, 100K `lib-sanitize`, 200K
/// `regex-strip-base64`, 500K `combined-optimal`, else `combined-maximum`.
pub fn recommend(size: usize) -> CompactionMethod {
    DEFAULT_RECOMMENDATION.select(size)
}

/// Rough LLM token count: chars / 4, rounded up. Not a tokenizer.
pub fn estimate_tokens(html: &str) -> usize {
    estimate_tokens_with(html, 4)
}

pub fn estimate_tokens_with(html: &str, chars_per_token: usize) -> usize {
    html.chars().count().div_ceil(chars_per_token.max(1))
}

/// Informational warnings for a compacted output of `size` bytes.
pub fn size_warnings(size: usize, config: &WarningConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if size > config.large_output_bytes {
        warnings.push(format!(
            "Compacted HTML is still large ({size} bytes); consider a more aggressive method"
        ));
    }
    if size > config.truncation_risk_bytes {
        warnings.push(format!(
            "Compacted HTML exceeds {}KB and may be truncated by the model",
            config.truncation_risk_bytes / 1000
        ));
    }
    warnings
}

/// Cut `html` to at most `max` bytes on a char boundary. Returns `None` when
/// it already fits.
pub fn truncate_to(html: &str, max: usize) -> Option<String> {
    if html.len() <= max {
        return None;
    }
    let mut end = max;
    while !html.is_char_boundary(end) {
        end -= 1;
    }
    Some(html[..end].to_string())
}
