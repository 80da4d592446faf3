//! # Sign-up form state and submission flow
//!
//! The page keeps a single [`SignUpState`] in a signal. It owns the four form
//! fields and the busy flag, and splits a submission into two synchronous
//! halves around the one network call:
//!
//! 1. [`SignUpState::begin`] marks the form busy and builds the
//!    [`SignUpRequest`], or returns `None` while a previous submission is
//!    still in flight.
//! 2. The caller awaits [`AuthService::sign_up`](api::AuthService::sign_up).
//! 3. [`SignUpState::finish`] clears the busy flag and turns the result into a
//!    [`Completion`]: the notice to show and, on success, where to navigate.
//!
//! Keeping the await outside the state lets the view hold the signal's write
//! lock only for the synchronous steps.

use std::fmt;
use std::str::FromStr;

use api::{AuthError, ProfileMetadata, SignUpRequest, SignedUp};

/// Path of the sign-in view the page redirects to after a successful sign-up.
pub const SIGN_IN_PATH: &str = "/signin";

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Account created successfully! You can now sign in.";
pub const ERROR_TITLE: &str = "Error";
/// Shown when the service gives no reason for the failure.
pub const FALLBACK_ERROR: &str = "Failed to sign up";

pub const PASSWORD_HINT: &str =
    "Must be 8+ characters with uppercase, lowercase, number, and special character.";

/// One of the four inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl SignUpField {
    pub const ALL: [SignUpField; 4] = [
        SignUpField::FirstName,
        SignUpField::LastName,
        SignUpField::Email,
        SignUpField::Password,
    ];

    /// The `name`/`id` attribute of the matching input.
    pub fn name(self) -> &'static str {
        match self {
            SignUpField::FirstName => "firstName",
            SignUpField::LastName => "lastName",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
        }
    }
}

impl fmt::Display for SignUpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignUpField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignUpField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown sign-up field: {s}"))
    }
}

/// The values typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn get(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::FirstName => &self.first_name,
            SignUpField::LastName => &self.last_name,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
        }
    }

    /// Replace exactly one field.
    pub fn set(&mut self, field: SignUpField, value: impl Into<String>) {
        let slot = match field {
            SignUpField::FirstName => &mut self.first_name,
            SignUpField::LastName => &mut self.last_name,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Build the request for a page served from `origin`.
    pub fn to_request(&self, origin: &str) -> SignUpRequest {
        SignUpRequest::new(
            self.email.clone(),
            self.password.clone(),
            redirect_target(origin),
            ProfileMetadata {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
            },
        )
    }
}

/// Landing page linked from the confirmation email: the site root.
pub fn redirect_target(origin: &str) -> String {
    format!("{}/", origin.trim_end_matches('/'))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A toast to show the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

/// What the page does once a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub notice: Notice,
    pub redirect_to: Option<&'static str>,
}

impl Completion {
    pub fn from_result(result: &Result<SignedUp, AuthError>) -> Self {
        match result {
            Ok(_) => Completion {
                notice: Notice {
                    kind: NoticeKind::Success,
                    title: SUCCESS_TITLE.to_string(),
                    description: SUCCESS_MESSAGE.to_string(),
                },
                redirect_to: Some(SIGN_IN_PATH),
            },
            Err(e) => Completion {
                notice: Notice {
                    kind: NoticeKind::Destructive,
                    title: ERROR_TITLE.to_string(),
                    description: e.message().unwrap_or_else(|| FALLBACK_ERROR.to_string()),
                },
                redirect_to: None,
            },
        }
    }

    /// Hand the outcome to the page: `notify` always runs once, `navigate`
    /// only when there is somewhere to go.
    pub fn apply(self, notify: impl FnOnce(Notice), navigate: impl FnOnce(&'static str)) {
        notify(self.notice);
        if let Some(path) = self.redirect_to {
            navigate(path);
        }
    }
}

/// Form fields plus the busy flag of one sign-up page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpState {
    pub form: SignUpForm,
    busy: bool,
}

impl SignUpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn update(&mut self, field: SignUpField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Start a submission. Returns `None` if one is already in flight.
    pub fn begin(&mut self, origin: &str) -> Option<SignUpRequest> {
        if self.busy {
            tracing::debug!("Ignoring sign-up submit while a request is in flight");
            return None;
        }
        self.busy = true;
        tracing::info!(email = %self.form.email, "Submitting sign-up");
        Some(self.form.to_request(origin))
    }

    /// Settle a submission started with [`begin`](Self::begin).
    pub fn finish(&mut self, result: Result<SignedUp, AuthError>) -> Completion {
        self.busy = false;
        match &result {
            Ok(signed_up) => tracing::info!(
                user_id = %signed_up.user_id,
                confirmation_pending = signed_up.confirmation_pending,
                "Sign-up succeeded"
            ),
            Err(e @ AuthError::Service { status, .. }) => {
                tracing::warn!(status, "Sign-up rejected: {}", e)
            }
            Err(e) => tracing::error!("Sign-up failed: {}", e),
        }
        Completion::from_result(&result)
    }
}
