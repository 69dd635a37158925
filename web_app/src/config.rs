//! Application configuration management with security considerations.
//!
//! All values come from environment variables and are loaded once at startup
//! by [`AppConfig::init_from_env`]. The resulting struct is passed explicitly
//! to whatever needs it, so tests can build their own values.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;

/// Application configuration with security-aware field management.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Database host value (NON-SENSITIVE)
    /// Example: "sqlite:data/crm.db"
    pub db_host: String,

    /// 🔒 SENSITIVE: Database password to encrypt SQLite data (prod only)
    #[envconfig(default = "")]
    pub db_pass_encrypt: String,

    /// Host address for web server binding (NON-SENSITIVE)
    /// Example: "0.0.0.0", "localhost", "crm.example.com"
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    pub web_server_port: u16,

    /// Path to SSL private key file (SENSITIVE PATH)
    /// Security: File should have 600 permissions
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file (NON-SENSITIVE)
    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// 🔒 SENSITIVE: Shared token Facebook echoes back during the webhook
    /// subscription handshake (`hub.verify_token`)
    pub fb_verify_token: String,

    /// Facebook app id used to build the login dialog url (SEMI-SENSITIVE)
    pub fb_app_id: String,

    /// Graph API version used for dialog and token endpoints (NON-SENSITIVE)
    #[envconfig(default = "v19.0")]
    pub fb_graph_version: String,

    /// 🔒 SENSITIVE: Logfire write token. Without it logs go to stdout.
    pub logfire_token: Option<String>,
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

    /// Facebook Login dialog endpoint for the configured graph version
    pub fn facebook_dialog_url(&self) -> String {
        format!(
            "https://www.facebook.com/{version}/dialog/oauth",
            version = self.fb_graph_version
        )
    }

    /// Graph API endpoint that exchanges an authorization code
    pub fn facebook_token_url(&self) -> String {
        format!(
            "https://graph.facebook.com/{version}/oauth/access_token",
            version = self.fb_graph_version
        )
    }
}
