//! Bundle descriptor schema.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Declarative per-bundle configuration, read from `manifest.json`.
///
/// Unknown fields are ignored so newer bundles keep loading on older hosts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PocManifest {
    /// Human-readable label shown on the dashboard.
    pub title: String,

    /// Short summary shown on the dashboard.
    pub description: String,

    /// Response headers applied verbatim to every response inside the
    /// bundle's namespace. Absent means no headers are injected.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Document served at the bundle's namespace root. Absolute, or relative
    /// to the bundle directory. Defaults to `index.html` in the bundle.
    #[serde(default)]
    pub entry: Option<String>,
}

/// One discovered bundle: its identifier, parsed manifest, and the
/// directory its static assets are served from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPoc {
    /// The bundle's directory name; unique within a loaded set and used as
    /// the URL namespace segment.
    pub identifier: String,

    /// The parsed descriptor.
    pub manifest: PocManifest,

    /// Filesystem location of the bundle's static assets.
    pub content_root: PathBuf,
}

impl LoadedPoc {
    /// Resolve the entry document path against the bundle directory.
    pub fn entry_path(&self) -> PathBuf {
        match &self.manifest.entry {
            Some(entry) => {
                let path = Path::new(entry);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    self.content_root.join(path)
                }
            }
            None => self.content_root.join("index.html"),
        }
    }
}
