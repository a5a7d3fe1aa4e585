use crate::backend::{BackendClient, BackendError};
use crate::features::auth::types::SessionView;
use crate::features::shared::current_user;

#[derive(Default)]
pub struct GetSessionQuery {
    pub access_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetSessionError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Signed-in state for the caller. Missing, invalid, and expired tokens all
/// read as signed out.
#[tracing::instrument(skip_all)]
pub async fn handle(
    backend: BackendClient,
    query: GetSessionQuery,
) -> Result<SessionView, GetSessionError> {
    let view = match current_user(&backend, query.access_token.as_deref()).await? {
        Some(user) => SessionView::signed_in(user),
        None => SessionView::signed_out(),
    };
    Ok(view)
}
