//! Shared types for the HTML compactor: methods, options, results, errors
//! and configuration.

pub mod config;
pub mod error;
pub mod method;
pub mod types;

pub use config::{CompactorConfig, RecommendationConfig, RecommendationTier, TokenConfig, WarningConfig};
pub use error::{HcError, Result};
pub use method::{catalog, CompactionMethod, MethodCategory, MethodInfo};
pub use types::{reduction_percent, CompactionOptions, CompactionResult};
