//! Bearer-token extraction
//!
//! The client keeps its session and sends the access token as
//! `Authorization: Bearer <token>`. Handlers pick one of two extractors
//! depending on whether a signed-in user is mandatory.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::backend::{BackendClient, BackendError, User};
use crate::error::AppError;

/// Access token if the request carries one.
#[derive(Debug, Clone, Default)]
pub struct OptionalAccessToken(pub Option<String>);

/// Access token that must be present; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct RequiredAccessToken(pub String);

/// Pulls the token out of an `Authorization: Bearer` header.
/// Scheme matching is case-insensitive; blank tokens count as absent.
pub fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAccessToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(parts)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequiredAccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(parts)
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("You must be signed in".to_string()))
    }
}

/// Resolves the owner of `access_token`. A rejected or expired token
/// resolves to no user; other backend failures are returned.
pub async fn current_user(
    backend: &BackendClient,
    access_token: Option<&str>,
) -> Result<Option<User>, BackendError> {
    let Some(token) = access_token else {
        return Ok(None);
    };

    match backend.get_user(token).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_auth_failure() => {
            tracing::debug!(error = %e, "Access token rejected, treating caller as signed out");
            Ok(None)
        },
        Err(e) => Err(e),
    }
}
