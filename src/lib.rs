//! SecHeaders PoC host library.
//!
//! A single-process HTTP host for independent security-header demonstration
//! bundles. Bundles are discovered from the filesystem at startup, each is
//! mounted under its own URL namespace with its declared response headers,
//! and a dashboard lists them via the discovery API.

pub mod config;
pub mod http;
pub mod manifest;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use manifest::{LoadedPoc, PocManifest};
