use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use promptforge::config::{AppConfig, FallbackPolicy};
use promptforge::server;
use promptforge::state::AppState;
use promptforge::studio::store::ProjectStore;
use serde_json::{json, Value};
use tower::ServiceExt;

fn offline_app(fallback: FallbackPolicy) -> Router {
    let config = AppConfig {
        fallback,
        ..AppConfig::default()
    };
    let state = AppState::assemble(config, None, ProjectStore::in_memory()).shared();
    server::create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    dispatch(app, request).await
}

async fn send_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_reports_offline_model() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_ready"], false);
    assert!(body["provider"].is_null());
    assert!(body["timestamp"].is_string());
    assert!(body["checks"]["store_writable"].is_null());
    assert!(body["checks"]["ffmpeg_available"].is_boolean());
}

#[tokio::test]
async fn test_health_degrades_when_store_is_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let store = ProjectStore::open(blocker.join("studio_store.json")).unwrap();
    let state = AppState::assemble(AppConfig::default(), None, store).shared();
    let app = server::create_router(state);

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store_writable"], false);
}

#[tokio::test]
async fn test_categories_listing() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(&app, "GET", "/api/v1/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    let list = body["categories"].as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["id"], "creative_writing");
    assert_eq!(list[0]["name"], "Creative Writing");
    assert!(list.iter().any(|c| c["id"] == "general"));
}

#[tokio::test]
async fn test_enhance_degrades_to_local_fill() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/enhance",
        Some(json!({ "prompt": "Write a story about a dragon" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "creative_writing");
    assert_eq!(body["status"], "success");
    assert_eq!(body["metadata"]["source"], "fallback");
    assert_eq!(body["metadata"]["tone"], "professional");
    assert_eq!(body["metadata"]["target_length"], "detailed");
    assert_eq!(body["id"].as_str().unwrap().len(), 8);
    assert!(body["enhanced_prompt"]
        .as_str()
        .unwrap()
        .contains("Write a story about a dragon"));
    let score = body["quality_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[tokio::test]
async fn test_enhance_respects_explicit_category() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/enhance",
        Some(json!({ "prompt": "Write a story", "category": "code_generation" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "code_generation");
    assert_eq!(body["metadata"]["enhancement_template_used"], "code_generation");
}

#[tokio::test]
async fn test_enhance_validation_errors() {
    let app = offline_app(FallbackPolicy::Degrade);

    let (status, body) = send(&app, "POST", "/api/v1/enhance", Some(json!({ "prompt": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], 422);

    let long = "a".repeat(1001);
    let (status, _) = send(&app, "POST", "/api/v1/enhance", Some(json!({ "prompt": long }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_body_rejections_use_error_shape() {
    let app = offline_app(FallbackPolicy::Degrade);

    let (status, body) = send_raw(&app, "/api/v1/enhance", "{ \"prompt\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], 400);
    assert!(body["message"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/enhance",
        Some(json!({ "prompt": "Write a poem", "category": "poetry" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], 422);

    let (status, body) = send_raw(&app, "/api/projects", "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_enhance_fail_policy_without_model() {
    let app = offline_app(FallbackPolicy::Fail);
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/enhance",
        Some(json!({ "prompt": "Draft a marketing email" })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "AI service temporarily unavailable");
}

#[tokio::test]
async fn test_batch_enhancement() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/enhance/batch",
        Some(json!({ "prompts": ["write a poem", "analyze sales data"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["processed_count"], 2);
    assert_eq!(body["results"][0]["category"], "creative_writing");
    assert_eq!(body["results"][1]["category"], "data_analysis");

    let (status, _) = send(&app, "POST", "/api/v1/enhance/batch", Some(json!({ "prompts": [] }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/enhance/batch",
        Some(json!({ "prompts": ["ok", ""] })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().starts_with("prompts[1]"));
}

#[tokio::test]
async fn test_generate_requires_model() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, _) = send(
        &app,
        "POST",
        "/generate",
        Some(json!({ "user_prompt": "a cat on a roof", "prompt_type": "video" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_project_and_template_flow() {
    let app = offline_app(FallbackPolicy::Degrade);

    let (status, body) = send(&app, "POST", "/api/projects", Some(json!({ "name": "Trip" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User ID required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/projects",
        Some(json!({ "userId": "alice", "name": "Trip", "fps": 24 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let project_id = body["projectId"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", "/api/projects/alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projects"][0]["name"], "Trip");
    assert_eq!(body["projects"][0]["settings"]["fps"], 24);
    assert_eq!(body["stats"]["projectsCount"], 1);

    let uri = format!("/api/projects/alice/{}", project_id);
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "layers": [{ "type": "image", "source": "cover.png", "duration": 3 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["version"], 2);

    let (status, _) = send(&app, "PUT", "/api/projects/alice/missing", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "POST",
        "/api/templates",
        Some(json!({
            "userId": "alice",
            "projectId": project_id,
            "templateData": { "category": "travel", "tags": ["summer"] }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["templateId"].is_string());

    let (status, body) = send(&app, "GET", "/api/templates?category=travel&limit=5", None).await;
    assert_eq!(status, StatusCode::OK);
    let templates = body["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["name"], "Trip");
    assert_eq!(templates[0]["creatorId"], "alice");
    assert_eq!(templates[0]["projectData"]["layers"][0]["source"], "cover.png");

    let (_, body) = send(&app, "GET", "/api/templates?category=music", None).await;
    assert!(body["templates"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_render_empty_project_fails() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(
        &app,
        "POST",
        "/api/render",
        Some(json!({
            "projectId": "p1",
            "userId": "alice",
            "projectData": { "settings": { "resolution": "720p" }, "layers": [] }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("no layers"));
}

#[tokio::test]
async fn test_render_unknown_stored_project() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, _) = send(
        &app,
        "POST",
        "/api/render",
        Some(json!({ "projectId": "ghost", "userId": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_export_presets() {
    let app = offline_app(FallbackPolicy::Degrade);
    let (status, body) = send(&app, "GET", "/api/export-presets", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["presets"]["youtube"]["resolution"], "1920x1080");
    assert_eq!(body["presets"]["tiktok"]["fps"], 60);
    assert_eq!(body["presets"]["instagram"]["bitrate"], "5M");
}
