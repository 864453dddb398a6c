//! HTTP surface tests driven through the router in-process.

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use scrivener_core::{GenerationRequest, GenerationResponse, GenerationType};
use scrivener_error::ScrivenerResult;
use scrivener_server::{ApiState, ServerConfig, ServerConfigBuilder, create_router};
use scrivener_strategy::{GenerationStrategy, StrategyRegistry};
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

const GENERATE: &str = "/api/v1/generation/generate";

fn app() -> Router {
    create_router(ApiState::new(
        ServerConfig::default(),
        StrategyRegistry::default(),
    ))
}

fn valid_request() -> Value {
    json!({
        "generation_type": "default",
        "output_type": "json",
        "search_type": "global",
        "parameters": {"content": "Test content for generation"},
        "output_schema": {
            "type": "object",
            "properties": {
                "content": {"type": "string"},
                "metadata": {"type": "object"}
            }
        }
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(GENERATE)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_root_banner() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Content Generation Service");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_generate_default_json() {
    let (status, body) = post_json(app(), valid_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["content"].as_str().unwrap_or_default().is_empty());
    assert_eq!(
        body["metadata"],
        json!({"generation_type": "default", "output_type": "json", "search_type": "global"})
    );
    assert_eq!(body["search_results"], json!([]));
    assert_eq!(
        body["generation_parameters"],
        json!({"content": "Test content for generation"})
    );
    assert_eq!(body["output_schema"], valid_request()["output_schema"]);
}

#[tokio::test]
async fn test_generate_text_output() {
    let (status, body) = post_json(
        app(),
        json!({
            "generation_type": "default",
            "output_type": "text",
            "search_type": "global",
            "parameters": {"content": "Test content for generation"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output_schema"], Value::Null);
}

#[tokio::test]
async fn test_missing_content_is_bad_request() {
    let mut request = valid_request();
    request["parameters"] = json!({});
    let (status, body) = post_json(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap_or_default().contains("content"));
}

#[tokio::test]
async fn test_missing_claim_is_bad_request() {
    let mut request = valid_request();
    request["generation_type"] = json!("evidence_discovery");
    request["parameters"] = json!({"content": "x"});
    let (status, body) = post_json(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Missing required parameters for evidence_discovery: claim"
    );
}

#[tokio::test]
async fn test_invalid_generation_type_is_unprocessable() {
    let mut request = valid_request();
    request["generation_type"] = json!("invalid_type");
    let (status, body) = post_json(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["detail"]
            .as_str()
            .unwrap_or_default()
            .starts_with("generation_type must be one of")
    );
}

#[tokio::test]
async fn test_schema_rules_are_unprocessable() {
    let cases = [
        (json!(null), "output_schema must be a non-empty dictionary when output_type is JSON"),
        (json!({}), "output_schema must be a non-empty dictionary when output_type is JSON"),
        (
            json!("invalid_schema"),
            "output_schema must be a non-empty dictionary when output_type is JSON",
        ),
    ];
    for (schema, detail) in cases {
        let mut request = valid_request();
        request["output_schema"] = schema;
        let (status, body) = post_json(app(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], detail);
    }

    let mut request = valid_request();
    request["output_type"] = json!("text");
    let (status, body) = post_json(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["detail"],
        "output_schema should not be provided when output_type is not JSON"
    );
}

#[tokio::test]
async fn test_malformed_body_is_unprocessable() {
    let request = Request::builder()
        .method("POST")
        .uri(GENERATE)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["detail"]
            .as_str()
            .unwrap_or_default()
            .starts_with("request body is not valid JSON")
    );
}

#[tokio::test]
async fn test_unregistered_strategy_is_bad_request() {
    let registry = StrategyRegistry::builder().build();
    let app = create_router(ApiState::new(ServerConfig::default(), registry));
    let (status, body) = post_json(app, valid_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "No strategy found for generation type: default"
    );
}

/// Never finishes within any reasonable deadline.
struct StalledStrategy;

#[async_trait]
impl GenerationStrategy for StalledStrategy {
    fn generation_type(&self) -> GenerationType {
        GenerationType::Default
    }

    fn name(&self) -> &str {
        "stalled"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["content"]
    }

    async fn generate(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse> {
        self.validate_request(request)?;
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(GenerationResponse::for_request(request, "late", Vec::new())?)
    }
}

#[tokio::test(start_paused = true)]
async fn test_generation_timeout() {
    let config = ServerConfigBuilder::default()
        .generation_timeout_secs(2_u64)
        .build()
        .expect("valid config");
    let registry = StrategyRegistry::builder().register(StalledStrategy).build();
    let app = create_router(ApiState::new(config, registry));

    let (status, body) = post_json(app, valid_request()).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["detail"], "Generation timed out after 2 seconds");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let request = Request::builder()
        .method("POST")
        .uri(GENERATE)
        .header("content-type", "application/json")
        .header("origin", "http://localhost:8501")
        .body(Body::from(valid_request().to_string()))
        .expect("valid request");
    let response = app().oneshot(request).await.expect("router is infallible");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
