//! # Marquee Server
//!
//! Serves movie detail data assembled from TMDB and the trailer search
//! endpoint, behind the cookie-driven route gate.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use marquee_config::{ConfigLoad, ConfigLoader};
use marquee_core::DetailAggregator;
use marquee_server::{AppState, create_app};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee-server")]
#[command(about = "Movie detail aggregator with cookie-based route gating")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a .env file loaded before reading the environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file.clone() {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    info!(
        tmdb.api_base = %config.tmdb.api_base,
        trailer.search_url = %config.trailer.search_url,
        catalog.primary_locale = %config.catalog.primary_locale,
        catalog.reference_region = %config.catalog.reference_region,
        gate.protected = config.gate.protected_routes.len(),
        gate.public = config.gate.public_routes.len(),
        dev_mode = config.dev_mode,
        "configuration in effect"
    );

    let addr = config.bind_address();
    let state = AppState::from_config(config)?;
    let aggregator = state.aggregator().clone();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "marquee server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(aggregator))
        .await
        .context("server error")?;

    info!("marquee server stopped");
    Ok(())
}

async fn shutdown_signal(aggregator: DetailAggregator) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    let cancelled = aggregator.cancel_all();
    info!(cancelled, "shutdown requested; in-flight detail views cancelled");
}
