// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    media_root: PathBuf,
    media_public_base: String,
    media_namespace: String,
    admin_username: String,
    admin_password_hash: String,
    session_ttl: Duration,
    default_author: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://neuralpulse.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_session_ttl() -> u64 {
    60 * 60 * 24
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. A `.env` file, when
    /// present, is loaded first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let admin_password_hash =
            var("ADMIN_PASSWORD_HASH").ok_or(ConfigError::Missing("ADMIN_PASSWORD_HASH"))?;
        if !admin_password_hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid(
                "ADMIN_PASSWORD_HASH must be an argon2 PHC string".into(),
            ));
        }

        let session_ttl_secs = match var("SESSION_TTL_SECONDS") {
            Some(raw) => raw.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                ConfigError::Invalid(format!("SESSION_TTL_SECONDS must be a positive integer, got {raw}"))
            })?,
            None => default_session_ttl(),
        };

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(default_database_url),
            listen_addr: var("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            media_root: var("MEDIA_ROOT").unwrap_or_else(|| "./media".into()).into(),
            media_public_base: var("MEDIA_PUBLIC_BASE").unwrap_or_else(|| "/media".into()),
            media_namespace: var("MEDIA_NAMESPACE").unwrap_or_else(|| "articles".into()),
            admin_username: var("ADMIN_USERNAME").unwrap_or_else(|| "admin".into()),
            admin_password_hash,
            session_ttl: Duration::from_secs(session_ttl_secs),
            default_author: var("DEFAULT_AUTHOR").unwrap_or_else(|| "Keyy".into()),
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Directory the local image store writes to and `/media` serves from.
    pub fn media_root(&self) -> &PathBuf {
        &self.media_root
    }

    pub fn media_public_base(&self) -> &str {
        &self.media_public_base
    }

    pub fn media_namespace(&self) -> &str {
        &self.media_namespace
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_password_hash(&self) -> &str {
        &self.admin_password_hash
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn default_author(&self) -> &str {
        &self.default_author
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
