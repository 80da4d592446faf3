//! # Sign-up result
//!
//! The auth server answers a successful sign-up in one of two shapes:
//!
//! - **Confirmation pending**: the bare user object (`{"id": ..., "email": ...,
//!   "confirmation_sent_at": ...}`). No session is issued until the user
//!   follows the link in the confirmation email.
//! - **Auto-confirmed**: a session object (`{"access_token": ..., "user": {...}}`).
//!
//! [`SignUpReply`] decodes either shape and [`SignUpReply::into_signed_up`]
//! flattens it into the client-facing [`SignedUp`].

use serde::{Deserialize, Serialize};

/// Outcome of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedUp {
    pub user_id: String,
    pub email: Option<String>,
    /// True when the account cannot sign in until the email is confirmed.
    pub confirmation_pending: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserRecord {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    confirmed_at: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SignUpReply {
    Session { user: UserRecord },
    User(UserRecord),
}

impl SignUpReply {
    pub(crate) fn into_signed_up(self) -> SignedUp {
        match self {
            SignUpReply::Session { user } => SignedUp {
                user_id: user.id,
                email: user.email,
                confirmation_pending: false,
            },
            SignUpReply::User(user) => {
                let confirmed = user.confirmed_at.is_some() || user.email_confirmed_at.is_some();
                SignedUp {
                    user_id: user.id,
                    email: user.email,
                    confirmation_pending: !confirmed,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pending_user() {
        let body = r#"{
            "id": "8f2c",
            "aud": "authenticated",
            "email": "max@example.com",
            "confirmation_sent_at": "2025-01-01T00:00:00Z",
            "user_metadata": {"first_name": "Max", "last_name": "Robinson"}
        }"#;
        let reply: SignUpReply = serde_json::from_str(body).unwrap();
        let signed_up = reply.into_signed_up();
        assert_eq!(signed_up.user_id, "8f2c");
        assert_eq!(signed_up.email.as_deref(), Some("max@example.com"));
        assert!(signed_up.confirmation_pending);
    }

    #[test]
    fn test_decode_session() {
        let body = r#"{
            "access_token": "token",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {"id": "8f2c", "email": "max@example.com", "email_confirmed_at": "2025-01-01T00:00:00Z"}
        }"#;
        let reply: SignUpReply = serde_json::from_str(body).unwrap();
        let signed_up = reply.into_signed_up();
        assert_eq!(signed_up.user_id, "8f2c");
        assert!(!signed_up.confirmation_pending);
    }

    #[test]
    fn test_decode_confirmed_user_without_session() {
        let body = r#"{"id": "1", "email": "a@b.c", "confirmed_at": "2025-01-01T00:00:00Z"}"#;
        let reply: SignUpReply = serde_json::from_str(body).unwrap();
        assert!(!reply.into_signed_up().confirmation_pending);
    }

    #[test]
    fn test_reject_body_without_user() {
        let body = r#"{"access_token": "token"}"#;
        assert!(serde_json::from_str::<SignUpReply>(body).is_err());
    }
}
