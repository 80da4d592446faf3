//! # API crate — the authentication service boundary for ScanDoc
//!
//! Everything the frontend knows about the hosted auth backend lives here, so
//! that the UI only ever talks to the [`AuthService`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The [`AuthService`] trait, the GoTrue REST client and its [`AuthConfig`] |
//! | [`models`] | The [`SignUpRequest`] sent to the service and the [`SignedUp`] it answers with |
//! | [`error`] | [`AuthError`], the single failure type of every service call |

pub mod auth;
pub mod error;
pub mod models;

pub use async_trait::async_trait;
pub use auth::{AuthConfig, AuthService, GoTrueClient, UnavailableAuth};
pub use error::AuthError;
pub use models::{ProfileMetadata, SignUpOptions, SignUpRequest, SignedUp};
