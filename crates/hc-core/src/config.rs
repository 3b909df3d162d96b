use crate::error::{HcError, Result};
use crate::method::CompactionMethod;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Compaction pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactorConfig {
    pub warnings: WarningConfig,
    pub tokens: TokenConfig,
    pub recommendation: RecommendationConfig,
    /// Deepest element nesting the markup adapter accepts.
    pub max_nesting_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningConfig {
    pub large_output_bytes: usize,
    pub truncation_risk_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub chars_per_token: usize,
}

/// Size → method table. Tiers are checked in order; the first tier whose
/// `below` bound exceeds the input size wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub tiers: Vec<RecommendationTier>,
    pub fallback: CompactionMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTier {
    pub below: usize,
    pub method: CompactionMethod,
}

impl RecommendationConfig {
    /// Pick the method for an input of `size` bytes.
    pub fn select(&self, size: usize) -> CompactionMethod {
        self.tiers
            .iter()
            .find(|t| size < t.below)
            .map(|t| t.method)
            .unwrap_or(self.fallback)
    }
}

impl Default for WarningConfig {
    fn default() -> Self {
        Self {
            large_output_bytes: 100_000,
            truncation_risk_bytes: 500_000,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self { chars_per_token: 4 }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        let tier = |below, method| RecommendationTier { below, method };
        Self {
            tiers: vec![
                tier(30_000, CompactionMethod::None),
                tier(50_000, CompactionMethod::RegexMinify),
                tier(100_000, CompactionMethod::LibSanitize),
                tier(200_000, CompactionMethod::RegexStripBase64),
                tier(500_000, CompactionMethod::CombinedOptimal),
            ],
            fallback: CompactionMethod::CombinedMaximum,
        }
    }
}

impl Default for CompactorConfig {
    fn default() -> Self {
        Self {
            warnings: WarningConfig::default(),
            tokens: TokenConfig::default(),
            recommendation: RecommendationConfig::default(),
            max_nesting_depth: 512,
        }
    }
}

impl CompactorConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded compactor config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokens.chars_per_token == 0 {
            return Err(HcError::InvalidConfig("chars_per_token must be positive".into()));
        }
        if self.max_nesting_depth == 0 {
            return Err(HcError::InvalidConfig("max_nesting_depth must be positive".into()));
        }
        if self.warnings.large_output_bytes > self.warnings.truncation_risk_bytes {
            return Err(HcError::InvalidConfig(
                "large_output_bytes must not exceed truncation_risk_bytes".into(),
            ));
        }
        let tiers = &self.recommendation.tiers;
        if tiers.windows(2).any(|w| w[0].below >= w[1].below) {
            return Err(HcError::InvalidConfig(
                "recommendation tiers must have strictly increasing bounds".into(),
            ));
        }
        let methods: Vec<CompactionMethod> = tiers
            .iter()
            .map(|t| t.method)
            .chain([self.recommendation.fallback])
            .collect();
        if let Some(w) = methods
            .windows(2)
            .find(|w| w[1].aggressiveness() < w[0].aggressiveness())
        {
            return Err(HcError::InvalidConfig(format!(
                "recommendation method {} is less aggressive than {} before it",
                w[1], w[0]
            )));
        }
        Ok(())
    }
}
