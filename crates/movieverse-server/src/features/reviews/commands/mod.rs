pub mod create;

pub use create::{CreateReviewCommand, CreateReviewError};
