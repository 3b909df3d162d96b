//! HTTP API over the HTML compactor (Axum).
//!
//! Provides endpoints to compact captured HTML, recommend a method by size,
//! estimate token cost, list the method catalog, and report health.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::compact_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests;
