use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendError};
use crate::features::auth::types::SessionResponse;

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCommand {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[tracing::instrument(skip(backend, command), fields(email = %command.email))]
pub async fn handle(
    backend: BackendClient,
    command: LoginCommand,
) -> Result<SessionResponse, LoginError> {
    let session = backend
        .sign_in_with_password(&command.email, &command.password)
        .await?;

    tracing::info!(user_id = %session.user.id, "User signed in");

    Ok(session.into())
}
