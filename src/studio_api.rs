// PromptForge Studio API - REST backend for the video project editor
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::error::{ApiError, ApiJson};
use crate::state::SharedState;
use crate::studio::presets::export_presets;
use crate::studio::project::{ProjectDraft, ProjectPatch, RenderSpec, TemplateDraft};
use crate::studio::render::render_project;
use crate::studio::store::DEFAULT_TEMPLATE_LIMIT;

// ─── Request types ────────────────────────────────────────────────────────────
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub draft: ProjectDraft,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    #[serde(default)]
    pub template_data: TemplateDraft,
}

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub project_id: String,
    pub user_id: String,
    pub project_data: Option<RenderSpec>,
}

// ─── Router Factory ──────────────────────────────────────────────────────────
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/projects", post(create_project))
        .route("/api/projects/:user_id", get(list_projects))
        .route("/api/projects/:user_id/:project_id", put(update_project))
        .route("/api/templates", post(create_template).get(list_templates))
        .route("/api/render", post(start_render))
        .route("/api/export-presets", get(get_export_presets))
}

/// Identifiers end up in file paths; keep them to a safe alphabet.
fn require_id(field: &str, value: Option<&str>) -> Result<String, ApiError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ApiError::BadRequest(format!("{} required", field)));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::BadRequest(format!("{} contains invalid characters", field)));
    }
    Ok(value.to_string())
}

// ─── Project Handlers ─────────────────────────────────────────────────────────
async fn create_project(
    State(s): State<SharedState>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = require_id("User ID", req.user_id.as_deref())?;
    let project_id = s.store.create_project(&user_id, req.draft).await?;
    Ok(Json(json!({ "projectId": project_id })))
}

async fn list_projects(
    Path(user_id): Path<String>,
    State(s): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = s.store.list_projects(&user_id).await?;
    let stats = s.store.user_stats(&user_id).await?;
    Ok(Json(json!({ "projects": projects, "stats": stats })))
}

async fn update_project(
    Path((user_id, project_id)): Path<(String, String)>,
    State(s): State<SharedState>,
    ApiJson(patch): ApiJson<ProjectPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let project = s.store.update_project(&user_id, &project_id, patch).await?;
    Ok(Json(json!({ "success": true, "version": project.version })))
}

// ─── Template Handlers ────────────────────────────────────────────────────────
async fn create_template(
    State(s): State<SharedState>,
    ApiJson(req): ApiJson<CreateTemplateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = require_id("User ID", req.user_id.as_deref())?;
    let project_id = require_id("Project ID", req.project_id.as_deref())?;
    let template_id = s
        .store
        .save_as_template(&user_id, &project_id, req.template_data)
        .await?;
    Ok(Json(json!({ "templateId": template_id })))
}

async fn list_templates(
    Query(q): Query<TemplateQuery>,
    State(s): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = q.limit.unwrap_or(DEFAULT_TEMPLATE_LIMIT);
    let templates = s.store.list_templates(q.category.as_deref(), limit).await?;
    Ok(Json(json!({ "templates": templates })))
}

// ─── Render Handlers ──────────────────────────────────────────────────────────
async fn start_render(
    State(s): State<SharedState>,
    ApiJson(req): ApiJson<RenderRequest>,
) -> Result<Response, ApiError> {
    let user_id = require_id("User ID", Some(&req.user_id))?;
    let project_id = require_id("Project ID", Some(&req.project_id))?;

    let spec = match req.project_data {
        Some(spec) => spec,
        None => s.store.get_project(&user_id, &project_id).await?.render_spec(),
    };

    let filename = format!(
        "render_{}_{}.mp4",
        project_id,
        chrono::Utc::now().timestamp()
    );
    let output = s.config.renders_dir().join(&user_id).join(&filename);

    info!("[STUDIO-API] Render requested for project {}", project_id);
    match render_project(&s.config.ffmpeg_bin, &spec, &output).await {
        Ok(out) => Ok(Json(json!({
            "success": true,
            "url": format!("renders/{}/{}", user_id, filename),
            "filename": filename,
            "sizeMb": out.size_mb,
        }))
        .into_response()),
        Err(e) => {
            error!("[STUDIO-API] Render failed: {}", e);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response())
        }
    }
}

async fn get_export_presets() -> impl IntoResponse {
    Json(json!({ "presets": export_presets() }))
}
