//! Database connection ownership.
//!
//! A service creates exactly one [`DbHandle`] at startup, hands clones of its
//! connection pool to repositories and closes it on shutdown.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("unsupported DSN '{0}': expected sqlite: or postgres://")]
    UnknownDsn(String),
    #[error(transparent)]
    Sea(#[from] DbErr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbEngine {
    Sqlite,
    Postgres,
}

/// Connections to an in-memory database must never be recycled, or the data
/// goes with them.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Debug, Clone)]
pub struct DbHandle {
    engine: DbEngine,
    dsn: String,
    conn: DatabaseConnection,
}

impl DbHandle {
    /// Engine implied by the DSN scheme.
    ///
    /// # Errors
    /// Returns [`DbError::UnknownDsn`] for any other scheme.
    pub fn detect(dsn: &str) -> Result<DbEngine, DbError> {
        let s = dsn.trim_start();
        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            Ok(DbEngine::Postgres)
        } else if s.starts_with("sqlite:") {
            Ok(DbEngine::Sqlite)
        } else {
            Err(DbError::UnknownDsn(redact_dsn(dsn)))
        }
    }

    /// Opens the pool described by `cfg`.
    ///
    /// # Errors
    /// Returns an error for an unknown DSN scheme or when the database cannot
    /// be reached.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, DbError> {
        let engine = Self::detect(&cfg.dsn)?;
        let mut opts = ConnectOptions::new(cfg.dsn.clone());
        opts.max_connections(cfg.max_conns.max(1))
            .connect_timeout(cfg.connect_timeout)
            .sqlx_logging(false);
        if is_memory_dsn(&cfg.dsn) {
            opts.max_connections(1)
                .min_connections(1)
                .idle_timeout(MEMORY_CONN_LIFETIME)
                .max_lifetime(MEMORY_CONN_LIFETIME);
        }

        let conn = Database::connect(opts).await?;
        tracing::info!(engine = ?engine, dsn = %redact_dsn(&cfg.dsn), "database connected");
        Ok(Self {
            engine,
            dsn: redact_dsn(&cfg.dsn),
            conn,
        })
    }

    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    #[must_use]
    pub fn engine(&self) -> DbEngine {
        self.engine
    }

    /// DSN with any password masked.
    #[must_use]
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// # Errors
    /// Returns an error if the database does not answer.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.conn.ping().await.map_err(DbError::from)
    }

    /// Closes every pooled connection.
    ///
    /// # Errors
    /// Returns an error if the pool fails to shut down cleanly.
    pub async fn close(self) -> Result<(), DbError> {
        self.conn.close().await.map_err(DbError::from)
    }
}

fn is_memory_dsn(dsn: &str) -> bool {
    (dsn.starts_with("sqlite:") && dsn.contains(":memory:")) || dsn.contains("mode=memory")
}

/// Masks the password of a URL-style DSN for logs and diagnostics.
#[must_use]
pub fn redact_dsn(dsn: &str) -> String {
    if !dsn.contains('@') {
        return dsn.to_owned();
    }
    match url::Url::parse(dsn) {
        Ok(mut parsed) => {
            if parsed.password().is_some() && parsed.set_password(Some("***")).is_err() {
                return "***".to_owned();
            }
            parsed.to_string()
        }
        Err(_) => "***".to_owned(),
    }
}
