//! Origin of the page the app is served from.

/// The current page origin, e.g. `https://scandoc.example`.
///
/// Reads `window.location.origin` in the browser. Elsewhere (and if the
/// browser refuses) it falls back to `SITE_URL` or the local dev server.
pub fn page_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    api::AuthConfig::site_url_from_env()
}
