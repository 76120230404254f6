use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::store::StoreError;

/// The error kinds a caller can observe. Every internal cause collapses to
/// `Internal` so callers cannot tell an unreachable provider from a model that
/// returned garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    InvalidArgument,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("User must be authenticated")]
    Unauthenticated,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model output was not JSON at all.
    #[error("Malformed AI response: {0}")]
    MalformedJson(String),

    /// The model output was JSON, but not the shape we asked for.
    #[error("AI response schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Unauthenticated => ErrorKind::Unauthenticated,
            AppError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Llm(_)
            | AppError::MalformedJson(_)
            | AppError::SchemaMismatch(_)
            | AppError::Store(_)
            | AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidArgument(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match &self {
            AppError::Unauthenticated => "User must be authenticated".to_string(),
            AppError::InvalidArgument(msg) | AppError::NotFound(msg) => msg.clone(),
            other => {
                tracing::error!("Internal error: {other:?}");
                "An unexpected error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": kind.code(),
                "message": message
            }
        }));

        (kind.status(), body).into_response()
    }
}
