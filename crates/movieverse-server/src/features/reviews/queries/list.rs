use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendError};
use crate::features::reviews::types::Review;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReviewsQuery {
    pub movie_id: i64,
    /// E-mail of the signed-in viewer, used when a row has no author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListReviewsError {
    #[error("Movie id must be a positive number")]
    InvalidMovieId,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ListReviewsQuery {
    pub fn validate(&self) -> Result<(), ListReviewsError> {
        if self.movie_id <= 0 {
            return Err(ListReviewsError::InvalidMovieId);
        }
        Ok(())
    }
}

/// Reviews for one movie, oldest first.
#[tracing::instrument(skip(backend, access_token))]
pub async fn handle(
    backend: BackendClient,
    query: ListReviewsQuery,
    access_token: Option<&str>,
) -> Result<Vec<Review>, ListReviewsError> {
    query.validate()?;

    let rows = backend.select_reviews(query.movie_id, access_token).await?;
    let viewer_email = query.viewer_email.as_deref();

    Ok(rows
        .into_iter()
        .map(|row| Review::from_row(row, viewer_email))
        .collect())
}
