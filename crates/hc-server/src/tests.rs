use crate::config::{AppConfig, ServerConfig};
use crate::{app, app_with_state, state::AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ========== Health & catalog ==========

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptime_secs"].is_u64());
}

#[tokio::test]
async fn test_methods_catalog() {
    let (status, body) = send(app(), get("/api/v1/methods")).await;
    assert_eq!(status, StatusCode::OK);
    let methods = body.as_array().unwrap();
    assert_eq!(methods.len(), 12);
    assert_eq!(methods[0]["value"], "none");
    assert_eq!(methods[11]["value"], "combined-maximum");
    assert!(methods[0]["expectedReduction"].is_string());
}

#[tokio::test]
async fn test_unknown_route_404() {
    let resp = app().oneshot(get("/api/v1/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ========== Compact ==========

#[tokio::test]
async fn test_compact_minify() {
    let req = post_json(
        "/api/v1/compact",
        json!({ "html": "<div>  <p>Hi</p>  </div>", "method": "regex-minify" }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["html"], "<div><p>Hi</p></div>");
    assert_eq!(body["method"], "regex-minify");
    assert_eq!(body["originalSize"], 24);
    assert_eq!(body["compactedSize"], 20);
    assert_eq!(body["reductionPercent"], 17);
    assert_eq!(body["stagesApplied"], json!(["minify"]));
}

#[tokio::test]
async fn test_compact_unknown_method_falls_back() {
    let req = post_json("/api/v1/compact", json!({ "html": "<p>x</p>", "method": "bogus" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "none");
    assert_eq!(body["html"], "<p>x</p>");
    assert_eq!(body["warnings"][0], "Unknown method: bogus, using none");
}

#[tokio::test]
async fn test_compact_without_method_uses_recommendation() {
    // Small inputs are recommended `none`.
    let req = post_json("/api/v1/compact", json!({ "html": "<p>small</p>" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "none");
    assert_eq!(body["reductionPercent"], 0);
}

#[tokio::test]
async fn test_compact_max_size_truncates() {
    let req = post_json(
        "/api/v1/compact",
        json!({ "html": "<p>abcdefghij</p>", "method": "none", "maxSize": 5 }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["html"], "<p>ab");
    assert_eq!(body["compactedSize"], 5);
    assert!(body["warnings"][0].as_str().unwrap().starts_with("Output truncated"));
}

#[tokio::test]
async fn test_compact_missing_html_is_client_error() {
    let req = post_json("/api/v1/compact", json!({ "method": "none" }));
    let resp = app().oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_compact_shared_state() {
    let state = AppState::new();
    for method in ["regex-strip-styles", "lib-sanitize", "dom-extract-text"] {
        let req = post_json(
            "/api/v1/compact",
            json!({ "html": "<html><body><p style=\"x\">T</p></body></html>", "method": method }),
        );
        let (status, body) = send(app_with_state(state.clone()), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["method"], method);
    }
}

// ========== Recommend & estimate ==========

#[tokio::test]
async fn test_recommend_by_size() {
    let cases = [
        (1_000, "none"),
        (40_000, "regex-minify"),
        (60_000, "lib-sanitize"),
        (150_000, "regex-strip-base64"),
        (300_000, "combined-optimal"),
        (900_000, "combined-maximum"),
    ];
    for (size, expected) in cases {
        let (status, body) =
            send(app(), post_json("/api/v1/recommend", json!({ "size": size }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["method"], expected, "size {size}");
        assert_eq!(body["size"], size);
    }
}

#[tokio::test]
async fn test_recommend_by_html() {
    let (status, body) =
        send(app(), post_json("/api/v1/recommend", json!({ "html": "abcdefgh" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "none");
    assert_eq!(body["size"], 8);
    assert_eq!(body["estimatedTokens"], 2);
}

#[tokio::test]
async fn test_recommend_requires_input() {
    let (status, body) = send(app(), post_json("/api/v1/recommend", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_estimate() {
    let (status, body) =
        send(app(), post_json("/api/v1/estimate", json!({ "html": "12345" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokens"], 2);
    assert_eq!(body["size"], 5);
}

// ========== Errors & config ==========

#[test]
fn test_api_error_mapping() {
    use crate::error::ApiError;
    use hc_core::HcError;

    let err: ApiError = HcError::UnknownMethod("x".into()).into();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    let err: ApiError = HcError::Parse("bad".into()).into();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code, "internal_error");
}

#[test]
fn test_server_config_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.addr(), "0.0.0.0:8080");
}

#[test]
fn test_app_config_partial_json() {
    let config: AppConfig = serde_json::from_str(r#"{"server": {"port": 9000}}"#).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.compactor.tokens.chars_per_token, 4);
}

#[test]
fn test_app_config_file_validated() {
    let dir = std::env::temp_dir().join(format!("hc-server-cfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{"compactor": {"tokens": {"chars_per_token": 0}}}"#).unwrap();
    assert!(AppConfig::from_json_file(&path).is_err());

    let path = dir.join("good.json");
    std::fs::write(&path, r#"{"server": {"host": "127.0.0.1"}}"#).unwrap();
    let config = AppConfig::from_json_file(&path).unwrap();
    assert_eq!(config.server.addr(), "127.0.0.1:8080");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_state_rejects_invalid_compactor_config() {
    let mut config = hc_core::CompactorConfig::default();
    config.tokens.chars_per_token = 0;
    assert!(AppState::with_config(config).is_err());
    assert!(AppState::with_config(hc_core::CompactorConfig::default()).is_ok());
}
