use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogClient, CatalogError, POSTER_SIZE};
use crate::features::movies::types::{
    rating_label, CastMember, MovieDetails, Trailer, CAST_LIMIT,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMovieDetailsQuery {
    pub movie_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetMovieDetailsError {
    #[error("Movie id must be a positive number")]
    InvalidMovieId,
    #[error("Movie {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Catalog(CatalogError),
}

impl GetMovieDetailsQuery {
    pub fn validate(&self) -> Result<(), GetMovieDetailsError> {
        if self.movie_id <= 0 {
            return Err(GetMovieDetailsError::InvalidMovieId);
        }
        Ok(())
    }
}

#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: CatalogClient,
    query: GetMovieDetailsQuery,
) -> Result<MovieDetails, GetMovieDetailsError> {
    query.validate()?;

    let details = catalog
        .movie_details(query.movie_id)
        .await
        .map_err(|e| match e {
            CatalogError::NotFound(_) => GetMovieDetailsError::NotFound(query.movie_id),
            other => GetMovieDetailsError::Catalog(other),
        })?;

    let trailer = Trailer::pick(&details.videos.results);

    let mut cast = details.credits.cast;
    cast.sort_by_key(|member| member.order);
    let cast = cast
        .into_iter()
        .take(CAST_LIMIT)
        .map(|member| CastMember::from_catalog(member, &catalog))
        .collect();

    Ok(MovieDetails {
        poster_url: catalog.image_url(details.poster_path.as_deref(), POSTER_SIZE),
        rating_label: rating_label(details.vote_average),
        id: details.id,
        title: details.title,
        overview: details.overview.unwrap_or_default(),
        vote_average: details.vote_average,
        release_date: details.release_date.filter(|date| !date.is_empty()),
        trailer,
        cast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rejects_non_positive_ids() {
        assert!(GetMovieDetailsQuery { movie_id: 603 }.validate().is_ok());
        assert!(matches!(
            GetMovieDetailsQuery { movie_id: 0 }.validate(),
            Err(GetMovieDetailsError::InvalidMovieId)
        ));
        assert!(GetMovieDetailsQuery { movie_id: -4 }.validate().is_err());
    }
}
