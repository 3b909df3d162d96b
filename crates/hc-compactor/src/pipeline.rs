//! Compaction pipeline: maps each method to its stages and wraps execution
//! with measurement, advisory warnings and fail-closed fallback.

use crate::advisory::{estimate_tokens_with, size_warnings, truncate_to};
use crate::sanitizer::Sanitizer;
use crate::{base64, body, minify, styles, tree_walk};
use hc_core::{
    reduction_percent, CompactionMethod, CompactionOptions, CompactionResult, CompactorConfig,
    HcError, Result,
};
use hc_markup::{Html5everTree, MarkupTree};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// A single primitive transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ExtractBody,
    StripBase64,
    StripStyles,
    Minify,
    Sanitize,
    SanitizeStrict,
    ExtractText,
    ExtractStructure,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtractBody => "extract-body",
            Self::StripBase64 => "strip-base64",
            Self::StripStyles => "strip-styles",
            Self::Minify => "minify",
            Self::Sanitize => "sanitize",
            Self::SanitizeStrict => "sanitize-strict",
            Self::ExtractText => "extract-text",
            Self::ExtractStructure => "extract-structure",
        }
    }
}

/// Ordered stages for a method.
pub fn stages_for(method: CompactionMethod) -> &'static [Stage] {
    use Stage::*;
    match method {
        CompactionMethod::None => &[],
        CompactionMethod::RegexMinify => &[Minify],
        CompactionMethod::RegexStripBase64 => &[StripBase64],
        CompactionMethod::RegexStripStyles => &[StripStyles],
        CompactionMethod::RegexExtractBody => &[ExtractBody],
        CompactionMethod::RegexAggressive => &[ExtractBody, StripBase64, StripStyles, Minify],
        CompactionMethod::LibSanitize => &[Sanitize],
        CompactionMethod::LibSanitizeStrict => &[SanitizeStrict],
        CompactionMethod::DomExtractText => &[ExtractText],
        CompactionMethod::DomExtractStructure => &[ExtractStructure],
        CompactionMethod::CombinedOptimal => &[StripBase64, Sanitize, Minify],
        CompactionMethod::CombinedMaximum => {
            &[ExtractBody, StripBase64, StripStyles, SanitizeStrict, Minify]
        }
    }
}

/// The main compactor. Stateless between calls; share it freely.
#[derive(Clone)]
pub struct HtmlCompactor {
    tree: Arc<dyn MarkupTree>,
    config: CompactorConfig,
}

impl HtmlCompactor {
    pub fn new() -> Self {
        Self::from_valid_config(CompactorConfig::default())
    }

    /// Build from a custom config, rejecting it if `validate` fails.
    pub fn with_config(config: CompactorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CompactorConfig) -> Self {
        let tree = Html5everTree::new().with_max_depth(config.max_nesting_depth);
        Self { tree: Arc::new(tree), config }
    }

    /// Swap the markup parser.
    pub fn with_tree(mut self, tree: Arc<dyn MarkupTree>) -> Self {
        self.tree = tree;
        self
    }

    pub fn config(&self) -> &CompactorConfig {
        &self.config
    }

    /// Compact `html`. Never fails: errors become warnings and the original
    /// input is returned.
    pub fn compact(&self, html: &str, options: &CompactionOptions) -> CompactionResult {
        self.run(html, options.method, options.max_size, Vec::new())
    }

    /// Compact with a method given by name. Unknown names fall back to `none`.
    pub fn compact_named(&self, html: &str, method: &str, max_size: Option<usize>) -> CompactionResult {
        match method.parse::<CompactionMethod>() {
            Ok(method) => self.run(html, method, max_size, Vec::new()),
            Err(err) => {
                tracing::warn!(%err, "unknown compaction method");
                let warnings = vec![format!("Unknown method: {method}, using none")];
                self.run(html, CompactionMethod::None, max_size, warnings)
            }
        }
    }

    pub fn recommend(&self, size: usize) -> CompactionMethod {
        self.config.recommendation.select(size)
    }

    pub fn estimate_tokens(&self, html: &str) -> usize {
        estimate_tokens_with(html, self.config.tokens.chars_per_token)
    }

    /// Run the stages for `method` without the fallback wrapper.
    pub fn apply(&self, html: &str, method: CompactionMethod) -> Result<(String, Vec<String>)> {
        let mut current = html.to_string();
        let mut applied = Vec::new();
        for stage in stages_for(method) {
            let before = current.len();
            current = self
                .apply_stage(*stage, &current)
                .map_err(|e| HcError::stage(stage.name(), e.to_string()))?;
            tracing::debug!(stage = stage.name(), before, after = current.len(), "stage applied");
            applied.push(stage.name().to_string());
        }
        Ok((current, applied))
    }

    fn apply_stage(&self, stage: Stage, html: &str) -> Result<String> {
        let tree = self.tree.as_ref();
        Ok(match stage {
            Stage::ExtractBody => body::extract_body(html),
            Stage::StripBase64 => {
                let (out, replaced) = base64::strip_base64_counted(html);
                tracing::debug!(replaced, "data URIs replaced");
                out
            }
            Stage::StripStyles => styles::strip_styles(html),
            Stage::Minify => minify::minify(html),
            Stage::Sanitize => Sanitizer::lenient().sanitize(tree, html)?,
            Stage::SanitizeStrict => Sanitizer::strict().sanitize(tree, html)?,
            Stage::ExtractText => tree_walk::extract_text(tree, html)?,
            Stage::ExtractStructure => tree_walk::extract_structure(tree, html)?,
        })
    }

    fn apply_guarded(&self, html: &str, method: CompactionMethod) -> Result<(String, Vec<String>)> {
        panic::catch_unwind(AssertUnwindSafe(|| self.apply(html, method)))
            .unwrap_or_else(|payload| Err(HcError::stage(method.as_str(), panic_message(&*payload))))
    }

    fn run(
        &self,
        html: &str,
        method: CompactionMethod,
        max_size: Option<usize>,
        mut warnings: Vec<String>,
    ) -> CompactionResult {
        let start = Instant::now();
        let original_size = html.len();

        let (mut output, mut stages_applied) = match self.apply_guarded(html, method) {
            Ok(done) => done,
            Err(err) => {
                tracing::warn!(%method, error = %err, "compaction failed, returning original html");
                warnings.push(format!("Compaction failed, returned original HTML: {err}"));
                (html.to_string(), Vec::new())
            }
        };

        if let Some(max) = max_size {
            if let Some(truncated) = truncate_to(&output, max) {
                warnings.push(format!("Output truncated to {} bytes (was {} bytes)", truncated.len(), output.len()));
                output = truncated;
                stages_applied.push("truncate".into());
            }
        }

        warnings.extend(size_warnings(output.len(), &self.config.warnings));

        let compacted_size = output.len();
        let result = CompactionResult {
            estimated_tokens: self.estimate_tokens(&output),
            html: output,
            original_size,
            compacted_size,
            reduction_percent: reduction_percent(original_size, compacted_size),
            method,
            warnings,
            processing_time: start.elapsed().as_secs_f64() * 1000.0,
            stages_applied,
        };
        tracing::debug!(
            %method,
            original_size,
            compacted_size,
            reduction = result.reduction_percent,
            "compaction finished"
        );
        result
    }
}

impl Default for HtmlCompactor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HtmlCompactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlCompactor")
            .field("tree", &self.tree.name())
            .field("config", &self.config)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
