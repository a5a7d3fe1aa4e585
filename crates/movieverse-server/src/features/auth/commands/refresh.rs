use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendError};
use crate::features::auth::types::SessionResponse;

#[derive(Clone, Serialize, Deserialize)]
pub struct RefreshCommand {
    #[serde(default)]
    pub refresh_token: String,
}

impl std::fmt::Debug for RefreshCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCommand")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Refresh token is required")]
    TokenRequired,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl RefreshCommand {
    pub fn validate(&self) -> Result<(), RefreshError> {
        if self.refresh_token.trim().is_empty() {
            return Err(RefreshError::TokenRequired);
        }
        Ok(())
    }
}

#[tracing::instrument(skip_all)]
pub async fn handle(
    backend: BackendClient,
    command: RefreshCommand,
) -> Result<SessionResponse, RefreshError> {
    command.validate()?;
    let session = backend.refresh_session(command.refresh_token.trim()).await?;
    Ok(session.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_refresh_token_rejected() {
        let command = RefreshCommand {
            refresh_token: " ".to_string(),
        };
        assert!(matches!(command.validate(), Err(RefreshError::TokenRequired)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let command = RefreshCommand {
            refresh_token: "rt-secret".to_string(),
        };
        assert!(command.validate().is_ok());
        assert!(!format!("{:?}", command).contains("rt-secret"));
    }
}
