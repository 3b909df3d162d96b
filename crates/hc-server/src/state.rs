//! Application state shared across all handlers.

use hc_compactor::HtmlCompactor;
use hc_core::{CompactorConfig, Result};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub compactor: Arc<HtmlCompactor>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_compactor(HtmlCompactor::new())
    }

    pub fn with_config(config: CompactorConfig) -> Result<Self> {
        Ok(Self::with_compactor(HtmlCompactor::with_config(config)?))
    }

    pub fn with_compactor(compactor: HtmlCompactor) -> Self {
        Self {
            compactor: Arc::new(compactor),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
