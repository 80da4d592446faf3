//! Auth service configuration from environment variables.
//!
//! Native builds read the process environment (after loading `.env` with
//! `dotenvy`). The browser has no environment, so wasm builds bake the values
//! in at compile time with `option_env!`.

use crate::AuthError;

const URL_VAR: &str = "SUPABASE_URL";
const KEY_VAR: &str = "SUPABASE_PUBLISHABLE_KEY";
const SITE_URL_VAR: &str = "SITE_URL";

/// Origin used when there is no browser location to read.
pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";

/// Where the hosted auth project lives and how to authenticate to it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    /// Public API key sent as `apikey` and bearer token.
    pub anon_key: String,
    /// Fallback page origin for native builds.
    pub site_url: String,
}

impl AuthConfig {
    /// Load the config from the environment of the current target.
    pub fn from_env() -> Result<Self, AuthError> {
        load_dotenv();
        Self::from_lookup(env_var)
    }

    /// The fallback page origin alone, which does not need the rest of the
    /// config to be present.
    pub fn site_url_from_env() -> String {
        load_dotenv();
        site_url_from_lookup(env_var)
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let url = lookup(URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AuthError::Config(format!("{URL_VAR} not set")))?;
        let anon_key = lookup(KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AuthError::Config(format!("{KEY_VAR} not set")))?;
        let site_url = site_url_from_lookup(&lookup);

        Self::new(url, anon_key).map(|config| config.with_site_url(site_url))
    }

    /// Create a config for the given project URL and key.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, AuthError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(AuthError::Config(format!(
                "{URL_VAR} must be an http(s) URL, got {url:?}"
            )));
        }
        Ok(Self {
            url,
            anon_key: anon_key.into().trim().to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        })
    }

    /// Builder method to set the fallback page origin.
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL of an auth endpoint, e.g. `endpoint("signup")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

fn site_url_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(SITE_URL_VAR)
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
static DOTENV: std::sync::Once = std::sync::Once::new();

/// Load `.env` into the process environment, once per process.
#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    DOTENV.call_once(|| {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_var(key: &str) -> Option<String> {
    match key {
        URL_VAR => option_env!("SUPABASE_URL"),
        KEY_VAR => option_env!("SUPABASE_PUBLISHABLE_KEY"),
        SITE_URL_VAR => option_env!("SITE_URL"),
        _ => None,
    }
    .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = AuthConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co/"),
            ("SUPABASE_PUBLISHABLE_KEY", "public-key"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://project.supabase.co");
        assert_eq!(config.anon_key, "public-key");
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(
            config.endpoint("signup"),
            "https://project.supabase.co/auth/v1/signup"
        );
    }

    #[test]
    fn test_site_url_override() {
        let config = AuthConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_PUBLISHABLE_KEY", "public-key"),
            ("SITE_URL", "https://scandoc.example/"),
        ]))
        .unwrap();
        assert_eq!(config.site_url, "https://scandoc.example");
    }

    #[test]
    fn test_site_url_without_service_config() {
        assert_eq!(
            site_url_from_lookup(lookup(&[("SITE_URL", " https://scandoc.example/ ")])),
            "https://scandoc.example"
        );
        assert_eq!(site_url_from_lookup(lookup(&[])), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_missing_values() {
        let err = AuthConfig::from_lookup(lookup(&[("SUPABASE_PUBLISHABLE_KEY", "k")])).unwrap_err();
        assert_eq!(err.to_string(), "SUPABASE_URL not set");

        let err = AuthConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_PUBLISHABLE_KEY", ""),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "SUPABASE_PUBLISHABLE_KEY not set");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_env_file_loaded_once() {
        let first = AuthConfig::site_url_from_env();
        assert!(DOTENV.is_completed());

        let _ = AuthConfig::from_env();
        assert_eq!(AuthConfig::site_url_from_env(), first);
        assert!(DOTENV.is_completed());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = AuthConfig::new("project.supabase.co", "k").unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }
}
