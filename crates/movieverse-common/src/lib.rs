//! MovieVerse Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging bootstrap, and error handling for the MovieVerse project.
//!
//! # Overview
//!
//! - **Error Handling**: [`MovieverseError`] and the [`Result`] alias
//! - **Logging**: [`logging::init_logging`] driven by [`logging::LogConfig`]
//! - **Types**: Domain value types such as [`types::StarRating`]
//!
//! # Example
//!
//! ```no_run
//! use movieverse_common::types::StarRating;
//!
//! fn main() -> movieverse_common::Result<()> {
//!     let rating = StarRating::new(4)?;
//!     assert_eq!(rating.get(), 4);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{MovieverseError, Result};
