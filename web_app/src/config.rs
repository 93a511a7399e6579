//! Application configuration loaded from environment variables.
//!
//! Values are read once at startup by [`init_config`] and kept in
//! [`APP_CONFIG`] for the lifetime of the process.

use crate::consts;
use envconfig::Envconfig;
use std::sync::OnceLock;

/// Environment variables used to configure the service.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(from = "ENV", default = "local")]
    pub env: String,

    /// SQLite connection url (NON-SENSITIVE)
    /// Example: "sqlite:data/horse_index.db"
    #[envconfig(from = "DATABASE_URL", default = "sqlite:data/horse_index.db")]
    pub db_host: String,

    /// 🔒 SENSITIVE: key used to encrypt the SQLite file with SQLCipher.
    /// When absent the database is opened in plain mode.
    #[envconfig(from = "DB_PASS_ENCRYPT")]
    pub db_pass_encrypt: Option<String>,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_HOST", default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_PORT", default = "8000")]
    pub web_server_port: u16,

    /// Comma separated list of origins allowed to call the API.
    /// Falls back to [`consts::DEFAULT_CORS_ORIGINS`] when unset or blank.
    #[envconfig(from = "BACKEND_CORS_ORIGINS")]
    pub cors_origins: Option<String>,

    /// 🔒 SENSITIVE: logfire write token. Console logging is used without it.
    #[envconfig(from = "LOGFIRE_TOKEN")]
    pub logfire_token: Option<String>,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Parsed CORS allow-list, blanks removed.
    pub fn cors_origins(&self) -> Vec<String> {
        let origins = parse_origins(self.cors_origins.as_deref().unwrap_or_default());
        if origins.is_empty() {
            return parse_origins(consts::DEFAULT_CORS_ORIGINS);
        }
        origins
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Global application configuration, set by [`init_config`].
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads the configuration from the environment. Calling it twice keeps the
/// first loaded value.
pub fn init_config() -> anyhow::Result<()> {
    let app_config = AppConfig::init_from_env()?;
    let _ = APP_CONFIG.set(app_config);
    Ok(())
}
