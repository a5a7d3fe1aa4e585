pub mod queries;
pub mod routes;
pub mod types;

pub use queries::{
    GetMovieDetailsError, GetMovieDetailsQuery, ListMoviesError, ListMoviesQuery,
};
pub use routes::movies_routes;
pub use types::{CastMember, MovieCard, MovieDetails, Trailer};
