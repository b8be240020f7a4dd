//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// SQLite connection URL (default: sqlite://site_data.db).
    pub database_url: String,

    /// Maximum database connections in pool (default: 5).
    pub database_max_connections: u32,

    /// Upper bound on waiting for a connection or a write lock (default: 5s).
    pub database_timeout: Duration,

    /// Path to the Tera templates directory (default: ./templates).
    pub templates_dir: PathBuf,

    /// Path to static assets (default: ./static).
    pub static_dir: PathBuf,

    /// Cookie SameSite policy: "strict", "lax", or "none" (default: "strict").
    pub cookie_same_site: String,

    /// Whether the session cookie carries the Secure flag (default: true).
    pub cookie_secure: bool,

    /// Site name shown in page headers.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://site_data.db".to_string());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?;

        let database_timeout_secs: u64 = env::var("DATABASE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("DATABASE_TIMEOUT_SECS must be a valid u64")?;

        let templates_dir = env::var("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./templates"));

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./static"));

        let cookie_same_site = env::var("COOKIE_SAME_SITE")
            .unwrap_or_else(|_| "strict".to_string())
            .to_lowercase();

        let cookie_secure = match env::var("COOKIE_SECURE") {
            Ok(v) => parse_bool(&v).context("COOKIE_SECURE must be true or false")?,
            Err(_) => true,
        };

        let site_name =
            env::var("SITE_NAME").unwrap_or_else(|_| "Proofline Testing Systems".to_string());

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            database_timeout: Duration::from_secs(database_timeout_secs),
            templates_dir,
            static_dir,
            cookie_same_site,
            cookie_secure,
            site_name,
        })
    }

    /// Configuration for tests: a given database URL, templates from the
    /// given directory, insecure cookies so plain-HTTP test requests work.
    pub fn for_database(database_url: impl Into<String>, templates_dir: PathBuf) -> Self {
        Self {
            port: 0,
            database_url: database_url.into(),
            database_max_connections: 5,
            database_timeout: Duration::from_secs(5),
            static_dir: templates_dir.with_file_name("static"),
            templates_dir,
            cookie_same_site: "strict".to_string(),
            cookie_secure: false,
            site_name: "Proofline Testing Systems".to_string(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
