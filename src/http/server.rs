//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the discovery API and dashboard
//! - Mount every bundle router via the routing subsystem
//! - Wire up middleware (tracing)
//! - Bind server to listener and run with graceful shutdown

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::manifest::LoadedPoc;
use crate::routing::{mount_pocs, MountError};

/// Discovery projection of one bundle. `headers`, `entry`, and the content
/// root are internal wiring and never appear here.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PocSummary {
    pub identifier: String,
    pub title: String,
    pub description: String,
}

impl From<&LoadedPoc> for PocSummary {
    fn from(poc: &LoadedPoc) -> Self {
        Self {
            identifier: poc.identifier.clone(),
            title: poc.manifest.title.clone(),
            description: poc.manifest.description.clone(),
        }
    }
}

/// HTTP server for the PoC host.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Build the server from a validated config and a loaded bundle set.
    ///
    /// Fails if any bundle router cannot be constructed; in that case
    /// nothing is mounted and the process should abort.
    pub fn new(config: ServerConfig, pocs: &[LoadedPoc]) -> Result<Self, MountError> {
        let summaries: Arc<[PocSummary]> = pocs.iter().map(PocSummary::from).collect();
        let router = Self::build_router(&config, summaries, pocs)?;
        Ok(Self { router, config })
    }

    /// Build the axum router: discovery API, mounted bundles, dashboard.
    fn build_router(
        config: &ServerConfig,
        summaries: Arc<[PocSummary]>,
        pocs: &[LoadedPoc],
    ) -> Result<Router, MountError> {
        let api = Router::new()
            .route("/api/pocs", get(list_pocs))
            .with_state(summaries);

        let app = Router::new()
            .merge(api)
            .fallback_service(ServeDir::new(&config.content.dashboard_dir));

        let app = mount_pocs(app, &config.content.route_prefix, pocs)?;
        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Discovery endpoint: the loaded bundle set, in loader order.
async fn list_pocs(State(pocs): State<Arc<[PocSummary]>>) -> Json<Vec<PocSummary>> {
    Json(pocs.to_vec())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
