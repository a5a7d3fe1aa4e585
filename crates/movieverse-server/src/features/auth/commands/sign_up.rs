use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendError, SignUpOutcome};
use crate::features::auth::types::{SessionResponse, SignUpResponse};
use crate::features::shared::validation::non_blank;

/// Credentials are passed through as entered; the auth API decides what
/// it accepts.
#[derive(Clone, Serialize, Deserialize)]
pub struct SignUpCommand {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl std::fmt::Debug for SignUpCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[tracing::instrument(skip(backend, command), fields(email = %command.email))]
pub async fn handle(
    backend: BackendClient,
    command: SignUpCommand,
) -> Result<SignUpResponse, SignUpError> {
    let name = non_blank(command.name.as_deref());
    let outcome = backend
        .sign_up(&command.email, &command.password, name)
        .await?;

    Ok(match outcome {
        SignUpOutcome::Session(session) => {
            let session = SessionResponse::from(session);
            SignUpResponse {
                user: session.user.clone(),
                session: Some(session),
                confirmation_required: false,
            }
        },
        SignUpOutcome::PendingConfirmation(user) => SignUpResponse {
            session: None,
            user: user.into(),
            confirmation_required: true,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let command = SignUpCommand {
            email: "neo@zion.test".to_string(),
            password: "hunter2".to_string(),
            name: None,
        };
        let debug = format!("{:?}", command);
        assert!(debug.contains("neo@zion.test"));
        assert!(!debug.contains("hunter2"));
    }
}
