pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use commands::{CreateReviewCommand, CreateReviewError};
pub use queries::{ListReviewsError, ListReviewsQuery};
pub use routes::reviews_routes;
pub use types::{Review, ANONYMOUS_AUTHOR};
