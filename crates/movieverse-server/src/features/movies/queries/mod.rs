pub mod get_details;
pub mod list;

pub use get_details::{GetMovieDetailsError, GetMovieDetailsQuery};
pub use list::{ListMoviesError, ListMoviesQuery};
