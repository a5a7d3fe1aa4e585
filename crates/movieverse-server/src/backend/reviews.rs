//! Review rows in the data API (PostgREST)

use reqwest::Method;
use tracing::{debug, instrument};

use super::{decode, BackendClient, BackendError, NewReviewRow, ReviewRow};

impl BackendClient {
    /// All reviews for a movie, oldest first.
    #[instrument(skip(self, access_token))]
    pub async fn select_reviews(
        &self,
        movie_id: i64,
        access_token: Option<&str>,
    ) -> Result<Vec<ReviewRow>, BackendError> {
        let movie_filter = format!("eq.{}", movie_id);
        let response = self
            .request(Method::GET, &self.rest_url(self.reviews_table()), access_token)
            .query(&[
                ("select", "*"),
                ("movie_id", movie_filter.as_str()),
                ("order", "created_at.asc"),
            ])
            .send()
            .await?;

        let rows: Vec<ReviewRow> = decode(response).await?;
        debug!(count = rows.len(), "Reviews selected");
        Ok(rows)
    }

    /// Inserts one review as the owner of `access_token` and returns the stored row.
    #[instrument(skip(self, row, access_token), fields(movie_id = row.movie_id))]
    pub async fn insert_review(
        &self,
        row: &NewReviewRow,
        access_token: &str,
    ) -> Result<ReviewRow, BackendError> {
        let response = self
            .request(Method::POST, &self.rest_url(self.reviews_table()), Some(access_token))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let mut rows: Vec<ReviewRow> = decode(response).await?;
        rows.pop().ok_or_else(|| {
            BackendError::Decode("insert returned no representation".to_string())
        })
    }
}
