//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{use_auth_service, AuthClient, AuthProvider};

mod brand;
pub use brand::BrandPanel;

mod location;
pub use location::page_origin;

pub mod sign_up;
pub use sign_up::{Completion, Notice, NoticeKind, SignUpField, SignUpForm, SignUpState};
