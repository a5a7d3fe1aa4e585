//! Auth API routes
//!
//! - `POST /api/v1/auth/signup` - Register, optionally with a display name
//! - `POST /api/v1/auth/login` - Exchange e-mail and password for a session
//! - `POST /api/v1/auth/refresh` - Exchange a refresh token for a new session
//! - `POST /api/v1/auth/logout` - Revoke the bearer token's session
//! - `GET /api/v1/auth/session` - Current user and visible controls

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::{
    commands::{
        LoginCommand, LoginError, LogoutCommand, LogoutError, RefreshCommand, RefreshError,
        SignUpCommand, SignUpError,
    },
    queries::{GetSessionError, GetSessionQuery},
};
use crate::api::response::ApiResponse;
use crate::backend::BackendClient;
use crate::error::AppError;
use crate::features::shared::{OptionalAccessToken, RequiredAccessToken};

pub fn auth_routes() -> Router<BackendClient> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

/// # Response
///
/// - `201 Created` - Account registered; `session` is null while the
///   confirmation e-mail is pending
/// - `400 Bad Request` - Rejected by the auth API (message passed through)
#[tracing::instrument(skip(backend, payload))]
async fn sign_up(
    State(backend): State<BackendClient>,
    payload: Result<Json<SignUpCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let response = super::commands::sign_up::handle(backend, command).await?;

    tracing::info!(
        user_id = %response.user.id,
        confirmation_required = response.confirmation_required,
        "Account registered via API"
    );

    Ok(ApiResponse::success(response).with_status(StatusCode::CREATED))
}

/// # Response
///
/// - `200 OK` - Session tokens and the user
/// - `400 Bad Request` - Invalid credentials (message passed through)
#[tracing::instrument(skip(backend, payload))]
async fn login(
    State(backend): State<BackendClient>,
    payload: Result<Json<LoginCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let session = super::commands::login::handle(backend, command).await?;
    Ok(ApiResponse::success(session).into_response())
}

#[tracing::instrument(skip(backend, payload))]
async fn refresh(
    State(backend): State<BackendClient>,
    payload: Result<Json<RefreshCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let session = super::commands::refresh::handle(backend, command).await?;
    Ok(ApiResponse::success(session).into_response())
}

#[tracing::instrument(skip(backend, token))]
async fn logout(
    State(backend): State<BackendClient>,
    RequiredAccessToken(token): RequiredAccessToken,
) -> Result<Response, AppError> {
    let command = LogoutCommand {
        access_token: token,
    };
    let response = super::commands::logout::handle(backend, command).await?;
    Ok(ApiResponse::success(response).into_response())
}

#[tracing::instrument(skip(backend, token))]
async fn session(
    State(backend): State<BackendClient>,
    OptionalAccessToken(token): OptionalAccessToken,
) -> Result<Response, AppError> {
    let query = GetSessionQuery {
        access_token: token,
    };
    let view = super::queries::session::handle(backend, query).await?;
    Ok(ApiResponse::success(view).into_response())
}

impl From<SignUpError> for AppError {
    fn from(err: SignUpError) -> Self {
        match err {
            SignUpError::Backend(e) => AppError::Backend(e),
        }
    }
}

impl From<LoginError> for AppError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Backend(e) => AppError::Backend(e),
        }
    }
}

impl From<RefreshError> for AppError {
    fn from(err: RefreshError) -> Self {
        match err {
            RefreshError::TokenRequired => AppError::Validation(err.to_string()),
            RefreshError::Backend(e) => AppError::Backend(e),
        }
    }
}

impl From<LogoutError> for AppError {
    fn from(err: LogoutError) -> Self {
        match err {
            LogoutError::Backend(e) => AppError::Backend(e),
        }
    }
}

impl From<GetSessionError> for AppError {
    fn from(err: GetSessionError) -> Self {
        match err {
            GetSessionError::Backend(e) => AppError::Backend(e),
        }
    }
}
