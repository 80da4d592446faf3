//! Data models exchanged with the authentication service.

mod sign_up;
mod user;

pub use sign_up::{ProfileMetadata, SignUpOptions, SignUpRequest};
pub use user::SignedUp;
pub(crate) use user::SignUpReply;
