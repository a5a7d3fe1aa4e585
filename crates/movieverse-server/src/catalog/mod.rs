//! Movie catalog client (TMDB v3)
//!
//! Thin wrapper over the catalog HTTP API. Only the first page of any list
//! endpoint is requested, and failures are surfaced as-is without retries.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;

pub mod types;

pub use types::{
    TmdbCastMember, TmdbCredits, TmdbMovie, TmdbMovieDetails, TmdbPage, TmdbVideo, TmdbVideos,
};

/// Poster width used for cards and the detail page.
pub const POSTER_SIZE: &str = "w500";

/// Profile photo width used in the cast grid.
pub const PROFILE_SIZE: &str = "w185";

/// Errors returned by the catalog API
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog API key is invalid or missing")]
    Unauthorized,

    #[error("Catalog resource not found: {0}")]
    NotFound(String),

    #[error("Catalog rate limit exceeded")]
    RateLimited,

    #[error("Catalog API {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to parse catalog response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Shared catalog client. Cloning is cheap.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    config: Arc<CatalogConfig>,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!(base_url = %config.base_url, "Catalog client initialized");

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// First page of movies ordered by popularity.
    #[instrument(skip(self))]
    pub async fn discover_popular(&self) -> Result<Vec<TmdbMovie>, CatalogError> {
        let page: TmdbPage<TmdbMovie> = self
            .get(
                "/discover/movie",
                &[("sort_by", "popularity.desc"), ("page", "1")],
            )
            .await?;
        Ok(page.results)
    }

    /// First page of movies whose title matches `query`.
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>, CatalogError> {
        let page: TmdbPage<TmdbMovie> = self
            .get("/search/movie", &[("query", query), ("page", "1")])
            .await?;
        Ok(page.results)
    }

    /// Movie detail with trailer and cast sub-resources appended.
    #[instrument(skip(self))]
    pub async fn movie_details(&self, movie_id: i64) -> Result<TmdbMovieDetails, CatalogError> {
        self.get(
            &format!("/movie/{}", movie_id),
            &[("append_to_response", "videos,credits")],
        )
        .await
    }

    /// Absolute image URL for a catalog image path such as `/abc.jpg`.
    pub fn image_url(&self, path: Option<&str>, size: &str) -> Option<String> {
        image_url(&self.config.image_base_url, path, size)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "Catalog responded");

        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED => return Err(CatalogError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(CatalogError::NotFound(path.to_string())),
            StatusCode::TOO_MANY_REQUESTS => return Err(CatalogError::RateLimited),
            s => {
                return Err(CatalogError::Status {
                    path: path.to_string(),
                    status: s.as_u16(),
                })
            }
        }

        response.json::<T>().await.map_err(|source| CatalogError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Joins an image base, a size segment, and a catalog image path.
/// Missing or blank paths produce no URL.
pub fn image_url(base: &str, path: Option<&str>, size: &str) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    let separator = if path.starts_with('/') { "" } else { "/" };
    Some(format!(
        "{}/{}{}{}",
        base.trim_end_matches('/'),
        size,
        separator,
        path
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p";

    #[test]
    fn test_image_url_joins_size_and_path() {
        assert_eq!(
            image_url(BASE, Some("/poster.jpg"), POSTER_SIZE).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(
            image_url("https://cdn.test/", Some("face.jpg"), PROFILE_SIZE).as_deref(),
            Some("https://cdn.test/w185/face.jpg")
        );
    }

    #[test]
    fn test_image_url_missing_path() {
        assert_eq!(image_url(BASE, None, POSTER_SIZE), None);
        assert_eq!(image_url(BASE, Some(""), POSTER_SIZE), None);
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Status {
            path: "/discover/movie".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "Catalog API /discover/movie returned status 503");
        assert!(CatalogError::NotFound("/movie/1".into()).to_string().contains("/movie/1"));
    }
}
