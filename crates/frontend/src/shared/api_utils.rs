//! Backend URL resolution
//!
//! The page talks to a local backend when opened from `localhost` and to the
//! deployed backend everywhere else. The URL is resolved once when the app
//! starts and handed to every component through [`AppConfig`] in context.

/// Backend used when the page is served from `localhost`
pub const LOCAL_BACKEND_URL: &str = "http://cc_backend:5001";

/// Backend used for every other hostname
pub const DEPLOYED_BACKEND_URL: &str = "https://cc-backend-app.azurewebsites.net";

/// Compile-time override of the resolved backend, e.g.
/// `CERTGEN_BACKEND_URL=http://127.0.0.1:5001 trunk build`
const BACKEND_URL_OVERRIDE: Option<&str> = option_env!("CERTGEN_BACKEND_URL");

/// Pick the backend base URL for a page hostname
pub fn backend_base_for_host(hostname: &str) -> &'static str {
    if hostname == "localhost" {
        LOCAL_BACKEND_URL
    } else {
        DEPLOYED_BACKEND_URL
    }
}

/// Shared, immutable application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
}

impl AppConfig {
    /// Resolve from a hostname and an optional explicit override.
    /// A non-empty override wins; trailing slashes are dropped.
    pub fn resolve(hostname: &str, override_url: Option<&str>) -> Self {
        let base = match override_url.map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => backend_base_for_host(hostname),
        };
        Self {
            backend_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the current window location
    pub fn from_window() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        let config = Self::resolve(&hostname, BACKEND_URL_OVERRIDE);
        log::info!("backend resolved to {} (host '{}')", config.backend_url, hostname);
        config
    }

    /// Build a full URL from a service path
    ///
    /// # Example
    /// ```ignore
    /// let url = config.api_url("/verify-certificate");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_base_for_host() {
        assert_eq!(backend_base_for_host("localhost"), LOCAL_BACKEND_URL);
        assert_eq!(backend_base_for_host("certs.example.org"), DEPLOYED_BACKEND_URL);
        assert_eq!(backend_base_for_host("127.0.0.1"), DEPLOYED_BACKEND_URL);
        assert_eq!(backend_base_for_host(""), DEPLOYED_BACKEND_URL);
    }

    #[test]
    fn test_resolve_override() {
        let config = AppConfig::resolve("localhost", Some("http://127.0.0.1:5001/"));
        assert_eq!(config.backend_url, "http://127.0.0.1:5001");

        let config = AppConfig::resolve("localhost", Some("  "));
        assert_eq!(config.backend_url, LOCAL_BACKEND_URL);

        let config = AppConfig::resolve("example.org", None);
        assert_eq!(config.backend_url, DEPLOYED_BACKEND_URL);
    }

    #[test]
    fn test_api_url() {
        let config = AppConfig::resolve("localhost", None);
        assert_eq!(
            config.api_url("/chatbot"),
            "http://cc_backend:5001/chatbot"
        );
    }
}
