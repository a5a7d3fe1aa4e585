//! Account flows and the session mirror
//!
//! Sign-up, login, refresh, and logout are forwarded to the auth API. The
//! session query tells the client which header controls to show.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use commands::{
    LoginCommand, LoginError, LogoutCommand, LogoutError, RefreshCommand, RefreshError,
    SignUpCommand, SignUpError,
};
pub use queries::{GetSessionError, GetSessionQuery};
pub use routes::auth_routes;
pub use types::{Controls, LogoutResponse, SessionResponse, SessionView, SignUpResponse, UserView};
