//! Helpers shared by feature slices

pub mod session;
pub mod validation;

pub use session::{current_user, OptionalAccessToken, RequiredAccessToken};
