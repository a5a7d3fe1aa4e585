use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogClient, CatalogError};
use crate::features::movies::types::MovieCard;
use crate::features::shared::validation::non_blank;

/// Popular movies, or a title search when `query` has text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMoviesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListMoviesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ListMoviesQuery {
    /// Search text with surrounding whitespace removed; `None` when blank.
    pub fn search_text(&self) -> Option<&str> {
        non_blank(self.query.as_deref())
    }
}

#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: CatalogClient,
    query: ListMoviesQuery,
) -> Result<Vec<MovieCard>, ListMoviesError> {
    let movies = match query.search_text() {
        Some(text) => catalog.search_movies(text).await?,
        None => catalog.discover_popular().await?,
    };

    Ok(movies
        .into_iter()
        .map(|movie| MovieCard::from_catalog(movie, &catalog))
        .collect())
}
