use crate::method::CompactionMethod;
use serde::{Deserialize, Serialize};

/// Per-call compaction options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactionOptions {
    pub method: CompactionMethod,
    /// Upper bound on the output length in bytes. Longer output is truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<usize>,
}

impl CompactionOptions {
    pub fn new(method: CompactionMethod) -> Self {
        Self { method, max_size: None }
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

impl From<CompactionMethod> for CompactionOptions {
    fn from(method: CompactionMethod) -> Self {
        Self::new(method)
    }
}

/// Compaction result with statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactionResult {
    pub html: String,
    pub original_size: usize,
    pub compacted_size: usize,
    pub reduction_percent: i64,
    pub method: CompactionMethod,
    pub warnings: Vec<String>,
    /// Wall-clock milliseconds.
    pub processing_time: f64,
    pub estimated_tokens: usize,
    pub stages_applied: Vec<String>,
}

/// Rounded percentage decrease from `original` to `compacted`. Negative when
/// the output grew; zero for empty input.
pub fn reduction_percent(original: usize, compacted: usize) -> i64 {
    if original == 0 {
        return 0;
    }
    ((1.0 - compacted as f64 / original as f64) * 100.0).round() as i64
}
