// PromptForge HTTP Errors
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Every failure that reaches a handler is mapped to one JSON shape:
// {"error": true, "message": "...", "code": <status>}

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::agent::provider::ProviderError;
use crate::studio::render::RenderError;
use crate::studio::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("AI service temporarily unavailable")]
    Unavailable,
    #[error("Error processing prompt: {0}")]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ProjectNotFound { .. } => ApiError::NotFound(err.to_string()),
            other => ApiError::Store(other),
        }
    }
}

/// `Json` extractor whose rejections use the `ApiError` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Well-formed JSON that does not fit the type is a validation failure.
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errs: validator::ValidationErrors) -> Self {
        ApiError::Validation(errs.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Provider(_) | ApiError::Store(_) | ApiError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("[SERVER] {}", self);
        }
        let body = json!({
            "error": true,
            "message": self.to_string(),
            "code": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}
