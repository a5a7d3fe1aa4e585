//! Review API routes
//!
//! - `GET /api/v1/movies/:movie_id/reviews` - Reviews for a movie, oldest first
//! - `POST /api/v1/movies/:movie_id/reviews` - Add a review (signed-in users only)

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::{
    commands::{CreateReviewCommand, CreateReviewError},
    queries::{ListReviewsError, ListReviewsQuery},
};
use crate::api::response::ApiResponse;
use crate::backend::BackendClient;
use crate::error::AppError;
use crate::features::shared::{current_user, OptionalAccessToken, RequiredAccessToken};

pub fn reviews_routes() -> Router<BackendClient> {
    Router::new().route("/:movie_id/reviews", get(list_reviews).post(create_review))
}

/// List reviews
///
/// Works signed out. With a valid token the viewer's e-mail fills in for
/// rows that have no author. If the viewer cannot be resolved the list is
/// read with the anon key.
#[tracing::instrument(skip(backend, token))]
async fn list_reviews(
    State(backend): State<BackendClient>,
    movie_id: Result<Path<i64>, PathRejection>,
    OptionalAccessToken(token): OptionalAccessToken,
) -> Result<Response, AppError> {
    let Path(movie_id) = movie_id?;
    let viewer = current_user(&backend, token.as_deref())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not resolve viewer, listing reviews anonymously");
            None
        });
    let token = token.filter(|_| viewer.is_some());

    let query = ListReviewsQuery {
        movie_id,
        viewer_email: viewer.and_then(|user| user.email),
    };
    let reviews = super::queries::list::handle(backend, query, token.as_deref()).await?;

    tracing::debug!(count = reviews.len(), "Reviews listed via API");

    Ok(ApiResponse::success(reviews).into_response())
}

/// Create a review
///
/// # Request Body
///
/// ```json
/// { "rating": 4, "content": "Still holds up" }
/// ```
///
/// # Response
///
/// - `201 Created` - The stored review
/// - `400 Bad Request` - Non-numeric id, blank content or a rating outside 0-5
/// - `401 Unauthorized` - No session, or the session was rejected
/// - `502 Bad Gateway` - Backend unavailable
#[tracing::instrument(skip(backend, token, payload))]
async fn create_review(
    State(backend): State<BackendClient>,
    movie_id: Result<Path<i64>, PathRejection>,
    RequiredAccessToken(token): RequiredAccessToken,
    payload: Result<Json<CreateReviewCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(movie_id) = movie_id?;
    let Json(mut command) = payload?;
    command.movie_id = movie_id;

    let review = super::commands::create::handle(backend, &token, command).await?;

    tracing::info!(review_id = %review.id, "Review created via API");

    Ok(ApiResponse::success(review).with_status(StatusCode::CREATED))
}

impl From<ListReviewsError> for AppError {
    fn from(err: ListReviewsError) -> Self {
        match err {
            ListReviewsError::InvalidMovieId => AppError::Validation(err.to_string()),
            ListReviewsError::Backend(e) => AppError::Backend(e),
        }
    }
}

impl From<CreateReviewError> for AppError {
    fn from(err: CreateReviewError) -> Self {
        match err {
            CreateReviewError::InvalidMovieId | CreateReviewError::ContentRequired(_) => {
                AppError::Validation(err.to_string())
            },
            CreateReviewError::Unauthorized => AppError::Unauthorized(err.to_string()),
            CreateReviewError::Backend(e) => AppError::Backend(e),
        }
    }
}
