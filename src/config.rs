//! Application configuration management with security considerations.
//!
//! This module handles all configuration values required for the application.
//! The configuration is loaded from the environment exactly once in `main`
//! and handed to the handlers through the application state; core logic never
//! reads ambient global state.
//!
//! # Security Notes
//! - Every secret ships with an insecure development-only default so the app
//!   can boot without any environment set. Deployments must override them.
//! - Sensitive fields must never be logged

use envconfig::Envconfig;

/// Application configuration loaded from environment variables.
///
/// # Security Requirements
/// - All `SENSITIVE` fields must be overridden outside local development
/// - Use a secret management system in production
/// - Never log or expose sensitive values
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(from = "ENV", default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_HOST", default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_PORT", default = "5000")]
    pub web_server_port: u16,

    /// 🔒 SENSITIVE: secret keying the private session cookie.
    /// The default exists only so local development boots; it offers no
    /// protection whatsoever.
    #[envconfig(from = "SESSION_SECRET", default = "fallback-secret-key-for-development")]
    pub session_secret: String,

    /// 🔒 SENSITIVE: Facebook app secret used to verify webhook signatures
    #[envconfig(from = "FACEBOOK_APP_SECRET", default = "your-app-secret")]
    pub facebook_app_secret: String,

    /// Token compared during the one-time webhook subscription handshake
    /// (SEMI-SENSITIVE, distinct from the per-request signature secret)
    #[envconfig(from = "FACEBOOK_VERIFY_TOKEN", default = "your-verify-token")]
    pub facebook_verify_token: String,

    /// 🔒 SENSITIVE: page access token for the Graph API send endpoint.
    /// While it still holds the placeholder default, outbound sends are
    /// skipped entirely.
    #[envconfig(from = "FACEBOOK_PAGE_ACCESS_TOKEN", default = "your-page-access-token")]
    pub facebook_page_access_token: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Gets the server URL host with port for non-production environments
    pub fn url_host(&self) -> String {
        if self.is_prod() {
            return self.web_server_host.to_string();
        }

        format!(
            "{host}:{port}",
            host = self.web_server_host,
            port = self.web_server_port
        )
    }

    /// Gets the appropriate protocol (HTTP/HTTPS) based on environment
    pub fn web_server_protocol(&self) -> String {
        if self.is_prod() {
            return "https".into();
        }
        "http".into()
    }

    /// Constructs the complete base URL for the application
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.web_server_protocol(), self.url_host())
    }

    /// Constructs the Graph API endpoint for sending Messenger replies
    pub fn messenger_send_endpoint(&self) -> String {
        format!(
            "{base}/{version}/me/messages",
            base = crate::consts::GRAPH_API_BASE_URL,
            version = crate::consts::GRAPH_API_VERSION,
        )
    }

    /// True while the page access token is absent or still the placeholder
    /// shipped as the development default
    pub fn page_access_token_is_placeholder(&self) -> bool {
        self.facebook_page_access_token.is_empty()
            || self.facebook_page_access_token == crate::consts::PLACEHOLDER_PAGE_ACCESS_TOKEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            env: "local".into(),
            web_server_host: "0.0.0.0".into(),
            web_server_port: 5000,
            session_secret: "fallback-secret-key-for-development".into(),
            facebook_app_secret: "your-app-secret".into(),
            facebook_verify_token: "your-verify-token".into(),
            facebook_page_access_token: "your-page-access-token".into(),
        }
    }

    #[test]
    fn test_placeholder_token_detected() {
        let mut config = test_config();
        assert!(config.page_access_token_is_placeholder());

        config.facebook_page_access_token = String::new();
        assert!(config.page_access_token_is_placeholder());

        config.facebook_page_access_token = "EAAGm0PX4ZCpsBA".into();
        assert!(!config.page_access_token_is_placeholder());
    }

    #[test]
    fn test_base_url_includes_port_outside_prod() {
        let mut config = test_config();
        assert_eq!(config.base_url(), "http://0.0.0.0:5000");

        config.env = "prod".into();
        config.web_server_host = "bot.example.com".into();
        assert_eq!(config.base_url(), "https://bot.example.com");
    }
}
