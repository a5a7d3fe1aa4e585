//! MovieVerse Server Library
//!
//! Backend-for-frontend for the MovieVerse client. It serves the static
//! single-page client and a small JSON API in front of two upstream services:
//!
//! - **Catalog**: TMDB v3 for popular movies, title search, details, trailers
//!   and cast
//! - **Backend**: A Supabase-compatible project for accounts (GoTrue) and the
//!   reviews table (PostgREST)
//!
//! # Architecture
//!
//! Features are vertical slices under [`features`], split into queries (reads)
//! and commands (writes). Each slice owns its request types, its error enum,
//! and its routes; errors convert into [`AppError`], which renders the standard
//! error envelope.
//!
//! # Example
//!
//! ```no_run
//! use movieverse_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await
//! }
//! ```

pub mod api;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

pub use error::AppError;
