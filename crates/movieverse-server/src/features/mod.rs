//! Feature modules implementing the MovieVerse API
//!
//! Each feature is a vertical slice with its own queries, commands and
//! routes:
//!
//! - **movies**: Popular list, title search, and movie details from the catalog
//! - **reviews**: Reading and writing reviews stored in the backend
//! - **auth**: Sign-up, login, refresh, logout, and the session view
//!
//! Handlers are thin: they extract the request, call the slice's `handle`
//! function, and wrap the result in the standard response envelope.

pub mod auth;
pub mod movies;
pub mod reviews;
pub mod shared;

use axum::{http::Uri, Router};

use crate::backend::BackendClient;
use crate::catalog::CatalogClient;
use crate::error::AppError;

/// Outbound clients handed to feature routes.
#[derive(Clone)]
pub struct FeatureState {
    pub catalog: CatalogClient,
    pub backend: BackendClient,
}

/// API router with every feature mounted under its path prefix:
///
/// - `/movies` - Movie list, search and details
/// - `/movies/:movie_id/reviews` - Reviews for one movie
/// - `/auth` - Account and session endpoints
///
/// Unknown API paths answer with a JSON 404 instead of the static client.
pub fn router(state: FeatureState) -> Router<()> {
    let movies = movies::movies_routes()
        .with_state(state.catalog.clone())
        .merge(reviews::reviews_routes().with_state(state.backend.clone()));

    Router::new()
        .nest("/movies", movies)
        .nest("/auth", auth::auth_routes().with_state(state.backend))
        .fallback(api_not_found)
}

async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}
