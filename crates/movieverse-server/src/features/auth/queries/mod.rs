pub mod session;

pub use session::{GetSessionError, GetSessionQuery};
