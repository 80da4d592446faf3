//! Authentication against the hosted auth service.

use async_trait::async_trait;

use crate::models::{SignUpRequest, SignedUp};
use crate::AuthError;

mod config;
mod gotrue;

pub use config::{AuthConfig, DEFAULT_SITE_URL};
pub use gotrue::GoTrueClient;

/// The account operations the frontend needs from an auth backend.
///
/// Futures are `?Send`: in the browser they run on the single-threaded
/// event loop and hold JS handles.
#[async_trait(?Send)]
pub trait AuthService {
    /// Create a new account. Issues exactly one request to the backend.
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignedUp, AuthError>;
}

/// Stand-in service used when no backend could be configured.
/// Every call fails with the configuration error that caused it.
#[derive(Debug, Clone)]
pub struct UnavailableAuth {
    reason: String,
}

impl UnavailableAuth {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait(?Send)]
impl AuthService for UnavailableAuth {
    async fn sign_up(&self, _request: SignUpRequest) -> Result<SignedUp, AuthError> {
        Err(AuthError::Config(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileMetadata;

    #[tokio::test]
    async fn test_unavailable_auth_reports_reason() {
        let auth = UnavailableAuth::new("SUPABASE_URL not set");
        let request = SignUpRequest::new(
            "max@example.com",
            "Secret123!",
            "http://localhost:8080/",
            ProfileMetadata::default(),
        );
        let err = auth.sign_up(request).await.unwrap_err();
        assert_eq!(err.message().as_deref(), Some("SUPABASE_URL not set"));
    }
}
