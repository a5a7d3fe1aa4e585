use movieverse_common::types::StarRating;
use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendError, NewReviewRow};
use crate::features::reviews::types::Review;
use crate::features::shared::validation::{validate_required, RequiredTextError};

/// Request body for a new review. `movie_id` comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewCommand {
    #[serde(default)]
    pub movie_id: i64,
    /// `0` or absent means unrated; values above 5 fail to deserialize.
    #[serde(default, with = "movieverse_common::types::optional_rating")]
    pub rating: Option<StarRating>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateReviewError {
    #[error("Movie id must be a positive number")]
    InvalidMovieId,
    #[error("{0}")]
    ContentRequired(#[from] RequiredTextError),
    #[error("You must be signed in to write a review")]
    Unauthorized,
    #[error(transparent)]
    Backend(BackendError),
}

impl From<BackendError> for CreateReviewError {
    fn from(err: BackendError) -> Self {
        if err.is_auth_failure() {
            Self::Unauthorized
        } else {
            Self::Backend(err)
        }
    }
}

impl CreateReviewCommand {
    pub fn validate(&self) -> Result<(), CreateReviewError> {
        if self.movie_id <= 0 {
            return Err(CreateReviewError::InvalidMovieId);
        }
        validate_required(&self.content, "Review text")?;
        Ok(())
    }
}

/// Stores a review authored by the owner of `access_token` and returns the
/// row as persisted.
#[tracing::instrument(skip(backend, access_token, command), fields(movie_id = command.movie_id))]
pub async fn handle(
    backend: BackendClient,
    access_token: &str,
    command: CreateReviewCommand,
) -> Result<Review, CreateReviewError> {
    command.validate()?;

    let user = backend.get_user(access_token).await?;

    let row = NewReviewRow {
        movie_id: command.movie_id,
        content: command.content.trim().to_string(),
        rating: command.rating.map(StarRating::get),
        user_id: user.id,
        author: user.email.clone(),
    };

    let stored = backend.insert_review(&row, access_token).await?;

    tracing::info!(review_id = stored.id, rated = row.rating.is_some(), "Review stored");

    Ok(Review::from_row(stored, user.email.as_deref()))
}
