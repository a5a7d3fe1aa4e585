use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::{Session, User};

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Name shown in the header next to the logout button.
    pub display_name: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            display_name: user.display_name(),
            id: user.id,
            email: user.email,
            name: user.user_metadata.name,
        }
    }
}

/// Tokens the client keeps between page loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    pub user: UserView,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            expires_at: session.expires_at,
            user: session.user.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// Present when the account is usable right away.
    pub session: Option<SessionResponse>,
    pub user: UserView,
    /// True while the confirmation e-mail is outstanding.
    pub confirmation_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub signed_out: bool,
}

/// Which header and detail-page controls are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub show_login: bool,
    pub show_signup: bool,
    pub show_logout: bool,
    pub can_review: bool,
}

impl Controls {
    pub fn for_session(authenticated: bool) -> Self {
        Self {
            show_login: !authenticated,
            show_signup: !authenticated,
            show_logout: authenticated,
            can_review: authenticated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub authenticated: bool,
    pub user: Option<UserView>,
    pub controls: Controls,
}

impl SessionView {
    pub fn signed_out() -> Self {
        Self {
            authenticated: false,
            user: None,
            controls: Controls::for_session(false),
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user.into()),
            controls: Controls::for_session(true),
        }
    }
}
