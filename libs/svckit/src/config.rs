//! Layered service configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults supplied by the service (port, DSN)
//! 2. an optional YAML file (`--config`)
//! 3. `APP__SECTION__KEY` environment variables, e.g. `APP__SERVER__PORT`
//! 4. the plain `PORT` and `DATABASE_URL` variables
//!
//! Command-line flags are applied on top by [`crate::bootstrap`].

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(String),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a single request, including store calls.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite://...`, `sqlite::memory:` or `postgres://...`
    pub dsn: String,
    pub max_conns: u32,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
            max_conns: 10,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory database; a single connection keeps every query on
    /// the same database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
            max_conns: 1,
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Defaults for one service: its port and its own database.
    #[must_use]
    pub fn for_service(port: u16, dsn: &str) -> Self {
        let mut cfg = Self::default();
        cfg.server.port = port;
        cfg.database.dsn = dsn.to_owned();
        cfg
    }

    /// Merges every configuration source over `defaults`.
    ///
    /// # Errors
    /// Returns an error if `file` does not exist or any source holds a value
    /// of the wrong shape.
    pub fn load(defaults: Self, file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(defaults));

        if let Some(path) = file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment
            .merge(Env::prefixed("APP__").split("__"))
            .merge(Env::raw().only(&["PORT", "DATABASE_URL"]).map(|key| {
                if key.as_str().eq_ignore_ascii_case("port") {
                    "server.port".into()
                } else {
                    "database.dsn".into()
                }
            }));

        figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }
}
