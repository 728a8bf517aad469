//! Process entry point shared by every service binary.

use std::future::Future;
use std::path::PathBuf;

use axum::Router;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::config::{AppConfig, DatabaseConfig};
use crate::db::DbHandle;
use crate::{logging, server, signals};

/// Static facts about one service binary.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub default_port: u16,
    pub default_dsn: &'static str,
}

#[derive(Debug, Parser)]
#[command(version)]
pub struct CliArgs {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port override for the HTTP server
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use a throwaway in-memory database
    #[arg(long)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the server (default)
    Run,
    /// Validate configuration and database connectivity, print the
    /// effective configuration and exit
    Check,
}

impl CliArgs {
    /// Parses `std::env::args` under the service's own name.
    #[must_use]
    pub fn parse_for(spec: &ServiceSpec) -> Self {
        let matches = Self::command()
            .name(spec.name)
            .about(spec.about)
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Effective configuration: layered sources, then command-line overrides.
///
/// # Errors
/// Returns an error if any configuration source is invalid.
pub fn resolve_config(spec: &ServiceSpec, cli: &CliArgs) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::for_service(spec.default_port, spec.default_dsn);
    let mut config = AppConfig::load(defaults, cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.mock {
        config.database = DatabaseConfig::in_memory();
    }
    if let Some(level) = logging::verbosity_level(cli.verbose) {
        level.clone_into(&mut config.logging.level);
    }
    Ok(config)
}

/// Parses the command line and runs the service until a shutdown signal.
///
/// `build` receives the open database handle and returns the service router
/// (it is expected to run the service's migrations first).
///
/// # Errors
/// Returns an error if configuration, logging, the database or the server
/// fail.
pub async fn run<F, Fut>(spec: ServiceSpec, build: F) -> anyhow::Result<()>
where
    F: FnOnce(DbHandle) -> Fut,
    Fut: Future<Output = anyhow::Result<Router>>,
{
    let cli = CliArgs::parse_for(&spec);
    let config = resolve_config(&spec, &cli)?;
    logging::init_logging(&config.logging)?;
    tracing::info!(service = spec.name, version = env!("CARGO_PKG_VERSION"), "starting");

    let db = DbHandle::connect(&config.database).await?;

    if cli.command == Some(Command::Check) {
        db.ping().await?;
        tracing::info!(engine = ?db.engine(), "database reachable");
        let mut shown = config.clone();
        db.dsn().clone_into(&mut shown.database.dsn);
        println!("{}", serde_json::to_string_pretty(&shown)?);
        db.close().await?;
        return Ok(());
    }

    let router = build(db.clone()).await?;
    let cancel = CancellationToken::new();
    let signal_listener = signals::cancel_on_shutdown(cancel.clone());

    let served = server::serve(router, &config.server, cancel).await;
    signal_listener.abort();
    if let Err(e) = db.close().await {
        tracing::warn!(error = %e, "database pool did not close cleanly");
    }
    tracing::info!(service = spec.name, "stopped");
    served
}
