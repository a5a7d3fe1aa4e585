use crate::backend::{BackendClient, BackendError};
use crate::features::auth::types::LogoutResponse;

pub struct LogoutCommand {
    pub access_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Revokes the session. A token the auth API no longer accepts is already
/// signed out, so that case succeeds too.
#[tracing::instrument(skip_all)]
pub async fn handle(
    backend: BackendClient,
    command: LogoutCommand,
) -> Result<LogoutResponse, LogoutError> {
    match backend.sign_out(&command.access_token).await {
        Ok(()) => {},
        Err(e) if e.is_auth_failure() => {
            tracing::debug!(error = %e, "Session already invalid at logout");
        },
        Err(e) => return Err(e.into()),
    }

    Ok(LogoutResponse { signed_out: true })
}
