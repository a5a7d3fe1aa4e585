use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated session issued by the auth API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Account record as returned by the auth API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form profile data attached at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// First word of the profile name, falling back to the e-mail address.
    pub fn display_name(&self) -> String {
        self.user_metadata
            .name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .map(str::to_string)
            .or_else(|| self.email.clone())
            .unwrap_or_default()
    }
}

/// Sign-up answers with a full session when the project auto-confirms
/// accounts, or with the bare user while a confirmation e-mail is pending.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    Session(Session),
    PendingConfirmation(User),
}

/// Row of the reviews table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRow {
    pub id: i64,
    pub movie_id: i64,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub author: Option<String>,
    pub content: String,
    #[serde(default)]
    pub rating: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the reviews table. `id` and `created_at` are
/// assigned by the database.
#[derive(Debug, Clone, Serialize)]
pub struct NewReviewRow {
    pub movie_id: i64,
    pub content: String,
    pub rating: Option<u8>,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
