//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the PoC host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Content locations and URL layout.
    pub content: ContentConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Content directories and the bundle URL namespace.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory scanned for PoC bundles at startup.
    pub poc_dir: String,

    /// Dashboard static files, served at the site root.
    pub dashboard_dir: String,

    /// URL segment bundles are mounted under (`/<route_prefix>/<identifier>/`).
    pub route_prefix: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            poc_dir: "headers".to_string(),
            dashboard_dir: "webapp".to_string(),
            route_prefix: "headers".to_string(),
        }
    }
}
