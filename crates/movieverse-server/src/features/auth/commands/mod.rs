pub mod login;
pub mod logout;
pub mod refresh;
pub mod sign_up;

pub use login::{LoginCommand, LoginError};
pub use logout::{LogoutCommand, LogoutError};
pub use refresh::{RefreshCommand, RefreshError};
pub use sign_up::{SignUpCommand, SignUpError};
