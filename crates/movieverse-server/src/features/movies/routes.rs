//! Movie API routes
//!
//! - `GET /api/v1/movies` - Popular movies, or a title search with `?query=`
//! - `GET /api/v1/movies/:movie_id` - Detail page with trailer and cast

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::queries::{
    GetMovieDetailsError, GetMovieDetailsQuery, ListMoviesError, ListMoviesQuery,
};
use crate::api::response::ApiResponse;
use crate::catalog::CatalogClient;
use crate::error::AppError;

pub fn movies_routes() -> Router<CatalogClient> {
    Router::new()
        .route("/", get(list_movies))
        .route("/:movie_id", get(get_movie))
}

/// List or search movies
///
/// # Response
///
/// - `200 OK` - Page 1 of movie cards; `meta.query` echoes the search text
/// - `502 Bad Gateway` - Catalog unavailable
#[tracing::instrument(skip(catalog, query), fields(query = ?query.query))]
async fn list_movies(
    State(catalog): State<CatalogClient>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<Response, AppError> {
    let search = query.search_text().map(str::to_string);
    let cards = super::queries::list::handle(catalog, query).await?;

    tracing::debug!(count = cards.len(), "Movies listed via API");

    let meta = json!({ "query": search, "count": cards.len() });
    Ok(ApiResponse::success_with_meta(cards, meta).into_response())
}

/// Movie detail
///
/// # Response
///
/// - `200 OK` - Details, trailer and cast
/// - `400 Bad Request` - Non-numeric or non-positive id
/// - `404 Not Found` - Unknown movie
/// - `502 Bad Gateway` - Catalog unavailable
#[tracing::instrument(skip(catalog))]
async fn get_movie(
    State(catalog): State<CatalogClient>,
    movie_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(movie_id) = movie_id?;
    let details =
        super::queries::get_details::handle(catalog, GetMovieDetailsQuery { movie_id }).await?;

    Ok(ApiResponse::success(details).into_response())
}

impl From<ListMoviesError> for AppError {
    fn from(err: ListMoviesError) -> Self {
        match err {
            ListMoviesError::Catalog(e) => AppError::Catalog(e),
        }
    }
}

impl From<GetMovieDetailsError> for AppError {
    fn from(err: GetMovieDetailsError) -> Self {
        match err {
            GetMovieDetailsError::InvalidMovieId => AppError::Validation(err.to_string()),
            GetMovieDetailsError::NotFound(_) => AppError::NotFound(err.to_string()),
            GetMovieDetailsError::Catalog(e) => AppError::Catalog(e),
        }
    }
}
