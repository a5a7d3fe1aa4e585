//! View models for the movie grid and the detail page

use serde::{Deserialize, Serialize};

use crate::catalog::{
    CatalogClient, TmdbCastMember, TmdbMovie, TmdbVideo, POSTER_SIZE, PROFILE_SIZE,
};

/// Number of cast members shown on the detail page.
pub const CAST_LIMIT: usize = 12;

/// Video type that identifies a trailer.
const TRAILER_TYPE: &str = "Trailer";

/// One tile of the movie grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub poster_url: Option<String>,
    pub vote_average: f64,
    /// Average vote with one decimal, e.g. `"7.3"`.
    pub rating_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub poster_url: Option<String>,
    pub overview: String,
    pub vote_average: f64,
    pub rating_label: String,
    pub release_date: Option<String>,
    pub trailer: Option<Trailer>,
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub key: String,
    pub site: String,
    pub name: String,
    /// Player URL for an iframe. Only YouTube trailers can be embedded.
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub profile_url: Option<String>,
}

pub fn rating_label(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

impl MovieCard {
    pub fn from_catalog(movie: TmdbMovie, catalog: &CatalogClient) -> Self {
        Self {
            poster_url: catalog.image_url(movie.poster_path.as_deref(), POSTER_SIZE),
            rating_label: rating_label(movie.vote_average),
            id: movie.id,
            title: movie.title,
            vote_average: movie.vote_average,
        }
    }
}

impl Trailer {
    /// First video typed `Trailer`, in catalog order.
    pub fn pick(videos: &[TmdbVideo]) -> Option<Self> {
        videos
            .iter()
            .find(|video| video.kind == TRAILER_TYPE)
            .map(|video| Self {
                key: video.key.clone(),
                site: video.site.clone(),
                name: video.name.clone(),
                embed_url: embed_url(&video.site, &video.key),
            })
    }
}

fn embed_url(site: &str, key: &str) -> Option<String> {
    if site.eq_ignore_ascii_case("youtube") && !key.is_empty() {
        Some(format!("https://www.youtube.com/embed/{}", key))
    } else {
        None
    }
}

impl CastMember {
    pub fn from_catalog(member: TmdbCastMember, catalog: &CatalogClient) -> Self {
        Self {
            profile_url: catalog.image_url(member.profile_path.as_deref(), PROFILE_SIZE),
            id: member.id,
            name: member.name,
            character: member.character,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(key: &str, site: &str, kind: &str) -> TmdbVideo {
        TmdbVideo {
            key: key.to_string(),
            site: site.to_string(),
            kind: kind.to_string(),
            name: format!("{} {}", site, kind),
        }
    }

    #[test]
    fn test_rating_label_one_decimal() {
        assert_eq!(rating_label(7.25), "7.2");
        assert_eq!(rating_label(8.0), "8.0");
        assert_eq!(rating_label(0.0), "0.0");
    }

    #[test]
    fn test_trailer_picks_first_trailer() {
        let videos = vec![
            video("teaser", "YouTube", "Teaser"),
            video("first", "YouTube", "Trailer"),
            video("second", "YouTube", "Trailer"),
        ];
        let trailer = Trailer::pick(&videos).unwrap();
        assert_eq!(trailer.key, "first");
        assert_eq!(
            trailer.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/first")
        );
    }

    #[test]
    fn test_trailer_outside_youtube_has_no_embed() {
        let trailer = Trailer::pick(&[video("123", "Vimeo", "Trailer")]).unwrap();
        assert_eq!(trailer.site, "Vimeo");
        assert!(trailer.embed_url.is_none());
    }

    #[test]
    fn test_no_trailer() {
        assert!(Trailer::pick(&[video("x", "YouTube", "Clip")]).is_none());
        assert!(Trailer::pick(&[]).is_none());
    }
}
