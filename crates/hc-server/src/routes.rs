use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use hc_compactor::{catalog, CompactionResult, MethodInfo};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn compact_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/methods", get(list_methods))
        .route("/api/v1/compact", post(compact))
        .route("/api/v1/recommend", post(recommend))
        .route("/api/v1/estimate", post(estimate))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactRequest {
    pub html: String,
    /// Method name; the size-based recommendation is used when absent.
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub max_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub method: String,
    pub size: usize,
    pub estimated_tokens: usize,
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub html: String,
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn list_methods() -> Json<&'static [MethodInfo]> {
    Json(catalog())
}

async fn compact(
    State(state): State<AppState>,
    Json(req): Json<CompactRequest>,
) -> Result<Json<CompactionResult>, ApiError> {
    let compactor = state.compactor.clone();
    let result = tokio::task::spawn_blocking(move || {
        let method = req
            .method
            .unwrap_or_else(|| compactor.recommend(req.html.len()).to_string());
        compactor.compact_named(&req.html, &method, req.max_size)
    })
    .await?;
    tracing::info!(
        method = %result.method,
        original = result.original_size,
        compacted = result.compacted_size,
        warnings = result.warnings.len(),
        "compact request served"
    );
    Ok(Json(result))
}

async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let compactor = &state.compactor;
    let (size, estimated_tokens) = match (req.size, req.html.as_deref()) {
        (_, Some(html)) => (html.len(), compactor.estimate_tokens(html)),
        (Some(size), None) => {
            (size, size.div_ceil(compactor.config().tokens.chars_per_token.max(1)))
        }
        (None, None) => return Err(ApiError::bad_request("either size or html is required")),
    };
    Ok(Json(RecommendResponse {
        method: compactor.recommend(size).to_string(),
        size,
        estimated_tokens,
    }))
}

async fn estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Json<Value> {
    Json(json!({
        "tokens": state.compactor.estimate_tokens(&req.html),
        "size": req.html.len(),
    }))
}
