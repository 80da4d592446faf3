//! Auth service context and hooks for the UI.

use std::rc::Rc;

use api::{AuthService, GoTrueClient, UnavailableAuth};
use dioxus::prelude::*;

/// Shared handle to the auth backend the page talks to.
#[derive(Clone)]
pub struct AuthClient(Rc<dyn AuthService>);

impl AuthClient {
    pub fn new(service: impl AuthService + 'static) -> Self {
        Self(Rc::new(service))
    }

    /// Connect to the hosted service configured in the environment.
    /// When configuration is missing, every call fails with the reason.
    pub fn from_env() -> Self {
        match GoTrueClient::from_env() {
            Ok(client) => {
                tracing::info!(url = %client.config().url, "Using hosted auth service");
                Self::new(client)
            }
            Err(e) => {
                tracing::error!("Auth service not configured: {}", e);
                Self::new(UnavailableAuth::new(e.to_string()))
            }
        }
    }

    pub fn service(&self) -> Rc<dyn AuthService> {
        self.0.clone()
    }
}

impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Get the auth backend provided by the nearest [`AuthProvider`].
pub fn use_auth_service() -> Rc<dyn AuthService> {
    use_context::<AuthClient>().service()
}

/// Provider component that makes the auth backend available to its children.
/// Without an explicit `client`, the hosted service from the environment is used.
#[component]
pub fn AuthProvider(#[props(default)] client: Option<AuthClient>, children: Element) -> Element {
    use_context_provider(move || client.unwrap_or_else(AuthClient::from_env));

    rsx! {
        {children}
    }
}
