//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_API_PREFIX, DEFAULT_TOKEN_PREFIX};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub cors: CorsSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub api_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub admin_username: String,
    pub admin_password: String,
    /// Argon2 PHC string. Takes precedence over `admin_password` when set.
    #[serde(default)]
    pub admin_password_hash: Option<String>,
    pub token_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// Empty list means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    #[serde(default)]
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Built-in defaults only, without files or environment.
    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8000)?
            .set_default("app.name", "bizup-server")?
            .set_default("app.api_prefix", DEFAULT_API_PREFIX)?
            .set_default("database.url", "sqlite://bizup.db?mode=rwc")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.admin_username", "admin")?
            .set_default("auth.admin_password", "bizup1234")?
            .set_default("auth.token_prefix", DEFAULT_TOKEN_PREFIX)?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:5173", "http://localhost:3000"],
            )?
            .set_default("log.format", "pretty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config = AppConfig::from_defaults().unwrap();
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.api_prefix, "/api/v1");
        assert_eq!(config.auth.admin_username, "admin");
        assert!(config.auth.admin_password_hash.is_none());
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert!(config.log.directory.is_none());
    }
}
