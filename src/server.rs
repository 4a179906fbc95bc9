// PromptForge HTTP Server
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::enhancer::{BatchResult, EnhancedResult};
use crate::engine::media::{MediaPromptRequest, MediaPromptResponse};
use crate::engine::request::BatchEnhancementRequest;
use crate::engine::{Category, EnhancementRequest};
use crate::error::{ApiError, ApiJson};
use crate::state::SharedState;

/// Full application router: enhancement API plus the studio routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/categories", get(categories))
        .route("/api/v1/enhance", post(enhance))
        .route("/api/v1/enhance/batch", post(enhance_batch))
        .route("/generate", post(generate))
        .merge(crate::studio_api::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(port: u16, state: SharedState) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let display_addr = if addr.ip().is_unspecified() {
        format!("127.0.0.1:{}", port)
    } else {
        addr.to_string()
    };
    info!("🚀 PromptForge API running on http://{}", display_addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("[SERVER] Ctrl-C received, shutting down.");
    }
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "PromptForge",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "GET /health",
            "categories": "GET /api/v1/categories",
            "enhance": "POST /api/v1/enhance",
            "batch": "POST /api/v1/enhance/batch",
            "generate": "POST /generate",
            "projects": "POST /api/projects",
            "templates": "GET /api/templates",
            "render": "POST /api/render",
            "export_presets": "GET /api/export-presets",
        }
    }))
}

async fn health(State(state): State<SharedState>) -> (StatusCode, Json<Value>) {
    let checks = state.health.check(state.store.path()).await;
    let (status, label) = if checks.is_healthy() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };
    let body = json!({
        "status": label,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "model_ready": state.enhancer.model_ready(),
        "provider": state.enhancer.provider_name(),
        "uptime_secs": state.health.uptime_secs(),
        "checks": checks,
    });
    (status, Json(body))
}

async fn categories() -> Json<Value> {
    let list: Vec<Value> = Category::ALL
        .iter()
        .map(|c| {
            json!({
                "id": c.as_str(),
                "name": c.label(),
                "description": c.description(),
            })
        })
        .collect();
    Json(json!({ "categories": list }))
}

async fn enhance(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<EnhancementRequest>,
) -> Result<Json<EnhancedResult>, ApiError> {
    info!("[SERVER] Enhance request ({} chars)", request.prompt.chars().count());
    let result = state.enhancer.enhance(request).await?;
    Ok(Json(result))
}

async fn enhance_batch(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<BatchEnhancementRequest>,
) -> Result<Json<BatchResult>, ApiError> {
    Ok(Json(state.enhancer.enhance_batch(request)?))
}

async fn generate(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<MediaPromptRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response: MediaPromptResponse = state.enhancer.generate_media_prompt(request).await?;
    Ok(Json(response))
}
