// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    articles_fallback_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://slug_routes.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_articles_fallback_path() -> String {
    "/articles".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!("DATABASE_MAX_CONNECTIONS must be an integer, got '{raw}'"))
            })?,
            None => default_max_connections(),
        };
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be greater than zero".into(),
            ));
        }

        let articles_fallback_path = lookup("ARTICLES_FALLBACK_PATH")
            .map(|p| p.trim().to_string())
            .unwrap_or_else(default_articles_fallback_path);
        if !articles_fallback_path.starts_with('/') {
            return Err(ConfigError::Invalid(
                "ARTICLES_FALLBACK_PATH must start with '/'".into(),
            ));
        }

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            articles_fallback_path,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Where unknown article slugs are redirected.
    pub fn articles_fallback_path(&self) -> &str {
        &self.articles_fallback_path
    }
}
