//! Shared utilities for integration testing.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use secheaders::config::ServerConfig;
use secheaders::manifest::load_manifests;
use secheaders::HttpServer;

/// Create a bundle directory with a manifest and an index page.
pub fn write_bundle(poc_root: &Path, id: &str, manifest_json: Option<&str>) {
    let dir = poc_root.join(id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), format!("<h1>{id}</h1>")).unwrap();
    if let Some(json) = manifest_json {
        fs::write(dir.join("manifest.json"), json).unwrap();
    }
}

/// Load bundles from `root`, start the host on an ephemeral port, and
/// return its address. The server task runs until the test process exits.
pub async fn spawn_host(root: &Path) -> SocketAddr {
    let poc_dir = root.join("headers");
    let dashboard_dir = root.join("webapp");
    fs::create_dir_all(&poc_dir).unwrap();
    fs::create_dir_all(&dashboard_dir).unwrap();
    fs::write(dashboard_dir.join("index.html"), "<h1>dashboard</h1>").unwrap();

    let mut config = ServerConfig::default();
    config.content.poc_dir = poc_dir.to_string_lossy().into_owned();
    config.content.dashboard_dir = dashboard_dir.to_string_lossy().into_owned();

    let pocs = load_manifests(&poc_dir).unwrap();
    let server = HttpServer::new(config, &pocs).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    addr
}
