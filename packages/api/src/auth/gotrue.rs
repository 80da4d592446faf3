//! # GoTrue HTTP client
//!
//! Talks to the hosted auth server (GoTrue, as run by Supabase) over its REST
//! API. Only the sign-up endpoint is used:
//!
//! ```text
//! POST {url}/auth/v1/signup?redirect_to={email_redirect_to}
//! apikey: {anon_key}
//! Authorization: Bearer {anon_key}
//!
//! {"email": "...", "password": "...", "data": {"first_name": "...", "last_name": "..."}}
//! ```
//!
//! Error bodies are not uniform across server versions. Depending on the
//! endpoint and release the human-readable text sits in `msg`, `message`,
//! `error_description` or `error`; [`error_message`] takes the first non-empty
//! one, the same precedence the hosted JS client applies with `||`.

use async_trait::async_trait;
use serde::Serialize;

use super::{AuthConfig, AuthService};
use crate::models::{ProfileMetadata, SignUpReply, SignUpRequest, SignedUp};
use crate::AuthError;

/// [`AuthService`] backed by the hosted GoTrue REST API.
#[derive(Debug, Clone)]
pub struct GoTrueClient {
    http: reqwest::Client,
    config: AuthConfig,
}

impl GoTrueClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client from [`AuthConfig::from_env`].
    pub fn from_env() -> Result<Self, AuthError> {
        AuthConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a ProfileMetadata,
}

impl<'a> From<&'a SignUpRequest> for SignUpBody<'a> {
    fn from(request: &'a SignUpRequest) -> Self {
        Self {
            email: &request.email,
            password: &request.password,
            data: &request.options.data,
        }
    }
}

#[async_trait(?Send)]
impl AuthService for GoTrueClient {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignedUp, AuthError> {
        let response = self
            .http
            .post(self.config.endpoint("signup"))
            .query(&[("redirect_to", request.options.email_redirect_to.as_str())])
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .json(&SignUpBody::from(&request))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Sign-up response from auth service");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Service {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let reply: SignUpReply = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(reply.into_signed_up())
    }
}

/// Extract the human-readable message from an error response body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "message", "error_description", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}
