//! SecHeaders — security-header PoC host.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 SECHEADERS HOST               │
//!                    │                                               │
//!   startup ────────▶│  config ──▶ manifest ──▶ routing ──▶ http    │
//!                    │  (TOML)     loader       factory    server   │
//!                    │                │          + mount      │      │
//!                    │                ▼                       ▼      │
//!   GET /api/pocs ◀──┼── discovery snapshot          axum dispatcher │
//!   GET /headers/x/ ◀┼──────────────────────── per-bundle routers    │
//!   GET /          ◀─┼──────────────────────── dashboard (ServeDir)  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Everything routable is built before the listener accepts a connection;
//! any load or mount failure aborts startup with the offending bundle named.

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use secheaders::config::{load_config, ServerConfig};
use secheaders::manifest::load_manifests;
use secheaders::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "secheaders", about = "Host for security-header PoC bundles")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "secheaders=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("secheaders v0.1.0 starting");

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        poc_dir = %config.content.poc_dir,
        dashboard_dir = %config.content.dashboard_dir,
        "Configuration loaded"
    );

    // Load the bundle set; a single bad manifest aborts startup.
    let pocs = load_manifests(Path::new(&config.content.poc_dir))?;
    tracing::info!(bundles = pocs.len(), "Manifests loaded");

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Dashboard available"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, &pocs)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
