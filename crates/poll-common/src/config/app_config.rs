//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional `.env` file.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub polls: PollsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations when the server starts
    #[serde(default = "default_true")]
    pub run_migrations: bool,
    /// Directory holding the SQL migration files; the bundled set when unset
    #[serde(default)]
    pub migrations_dir: Option<PathBuf>,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Poll application behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct PollsConfig {
    /// Number of questions shown on the index page
    #[serde(default = "default_index_limit")]
    pub index_limit: i64,
    /// Seed sample data on startup when the store is empty
    #[serde(default)]
    pub seed_on_startup: bool,
}

impl Default for PollsConfig {
    fn default() -> Self {
        Self {
            index_limit: default_index_limit(),
            seed_on_startup: false,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "poll-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_index_limit() -> i64 {
    5
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse an optional key; a present value that does not parse is an error
fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue(key, raw)))
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required key is missing or a value does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let index_limit = match lookup("POLLS_INDEX_LIMIT") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidValue("POLLS_INDEX_LIMIT", raw))?,
            None => default_index_limit(),
        };

        let seed_on_startup = match lookup("SEED_ON_STARTUP") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue("SEED_ON_STARTUP", raw))?,
            None => false,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "API_PORT")?
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig::from_lookup(&lookup)?,
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            polls: PollsConfig {
                index_limit,
                seed_on_startup,
            },
        })
    }
}

impl DatabaseConfig {
    /// Load only the database settings, for tools that do not serve HTTP
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue("RUN_MIGRATIONS", raw))?,
            None => default_true(),
        };

        Ok(Self {
            url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
            max_connections: parse_var(lookup, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or_else(default_max_connections),
            min_connections: parse_var(lookup, "DATABASE_MIN_CONNECTIONS")?
                .unwrap_or_else(default_min_connections),
            run_migrations,
            migrations_dir: lookup("MIGRATIONS_DIR").map(PathBuf::from),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
