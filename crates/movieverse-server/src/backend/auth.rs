//! Auth API calls (GoTrue)

use reqwest::Method;
use serde_json::json;
use tracing::{info, instrument};

use super::{check_status, decode, BackendClient, BackendError, Session, SignUpOutcome, User};

impl BackendClient {
    /// Registers a new account. `name` is stored as profile metadata.
    #[instrument(skip(self, password))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<SignUpOutcome, BackendError> {
        let body = match name {
            Some(name) => json!({ "email": email, "password": password, "data": { "name": name } }),
            None => json!({ "email": email, "password": password }),
        };

        let response = self
            .request(Method::POST, &self.auth_url("/signup"), None)
            .json(&body)
            .send()
            .await?;

        let outcome: SignUpOutcome = decode(response).await?;
        info!(
            confirmed = matches!(outcome, SignUpOutcome::Session(_)),
            "Account registered"
        );
        Ok(outcome)
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        let response = self
            .request(Method::POST, &self.auth_url("/token"), None)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        decode(response).await
    }

    #[instrument(skip_all)]
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, BackendError> {
        let response = self
            .request(Method::POST, &self.auth_url("/token"), None)
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        decode(response).await
    }

    /// Revokes the session behind `access_token`.
    #[instrument(skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, &self.auth_url("/logout"), Some(access_token))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    /// Resolves the user that owns `access_token`.
    #[instrument(skip_all)]
    pub async fn get_user(&self, access_token: &str) -> Result<User, BackendError> {
        let response = self
            .request(Method::GET, &self.auth_url("/user"), Some(access_token))
            .send()
            .await?;

        decode(response).await
    }
}
