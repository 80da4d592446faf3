//! # Sign-up request model
//!
//! [`SignUpRequest`] is what the sign-up page hands to an
//! [`AuthService`](crate::AuthService): the credentials plus the
//! [`SignUpOptions`] that travel alongside them.
//!
//! - `email_redirect_to` is the absolute URL the confirmation email links back
//!   to (the page origin followed by `/`).
//! - `data` is free-form profile metadata stored on the new account. The page
//!   only ever sends the first and last name, so it is typed as
//!   [`ProfileMetadata`] rather than an arbitrary JSON map.

use serde::{Deserialize, Serialize};

/// Credentials and options for creating a new account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub options: SignUpOptions,
}

/// Extra parameters attached to a sign-up call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpOptions {
    /// Where the confirmation email sends the user.
    pub email_redirect_to: String,
    pub data: ProfileMetadata,
}

/// Profile fields stored as user metadata on the new account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub first_name: String,
    pub last_name: String,
}

impl SignUpRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        email_redirect_to: impl Into<String>,
        data: ProfileMetadata,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            options: SignUpOptions {
                email_redirect_to: email_redirect_to.into(),
                data,
            },
        }
    }
}
