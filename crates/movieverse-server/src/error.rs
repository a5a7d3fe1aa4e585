//! Server-wide error type

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::backend::BackendError;
use crate::catalog::CatalogError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl AppError {
    /// HTTP status, machine-readable code, and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Catalog(CatalogError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Movie not found".to_string())
            },
            AppError::Catalog(e) => {
                tracing::error!(error = %e, "Catalog request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The movie catalog is unavailable".to_string(),
                )
            },
            AppError::Backend(BackendError::Api { status, message }) => match *status {
                401 | 403 => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message.clone()),
                409 => (StatusCode::CONFLICT, "CONFLICT", message.clone()),
                400..=499 => (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone()),
                _ => {
                    tracing::error!(status, %message, "Backend request failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "The account service is unavailable".to_string(),
                    )
                },
            },
            AppError::Backend(e) => {
                tracing::error!(error = %e, "Backend request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The account service is unavailable".to_string(),
                )
            },
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, "NOT_FOUND", message.clone()),
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
            },
            AppError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message.clone())
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
