//! Errors returned by the authentication service boundary.

use thiserror::Error;

/// Any failure of a call to the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("authentication service rejected the request"))]
    Service { status: u16, message: Option<String> },

    /// The request never got a response (network down, CORS, DNS, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a success status but an unreadable body.
    #[error("unexpected response from authentication service: {0}")]
    Decode(String),

    /// The client is not configured to reach a service.
    #[error("{0}")]
    Config(String),
}

impl AuthError {
    /// Human-readable message suitable for showing to the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            AuthError::Service { message, .. } => message.clone().filter(|m| !m.trim().is_empty()),
            other => Some(other.to_string()),
        }
    }

    /// HTTP status of a service rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Service { status, .. } => Some(*status),
            AuthError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message() {
        let err = AuthError::Service {
            status: 422,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.message().as_deref(), Some("Email already registered"));
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_service_without_message() {
        let err = AuthError::Service {
            status: 500,
            message: None,
        };
        assert!(err.message().is_none());
        assert_eq!(err.to_string(), "authentication service rejected the request");

        let blank = AuthError::Service {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert!(blank.message().is_none());
    }

    #[test]
    fn test_config_message() {
        let err = AuthError::Config("SUPABASE_URL not set".to_string());
        assert_eq!(err.message().as_deref(), Some("SUPABASE_URL not set"));
        assert_eq!(err.status(), None);
    }
}
