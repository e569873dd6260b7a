//! Bundle discovery and manifest loading.
//!
//! # Responsibilities
//! - Enumerate immediate subdirectories of the PoC root
//! - Parse each bundle's `manifest.json`
//! - Fail the whole load on any malformed manifest
//!
//! # Design Decisions
//! - Directories without a manifest are skipped silently ("not a bundle")
//! - Errors name the offending bundle so startup diagnostics are actionable
//! - Returned order is filesystem enumeration order; stable within one call,
//!   no cross-platform ordering promise

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::schema::{LoadedPoc, PocManifest};

/// Descriptor file expected inside each bundle directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Error type for manifest loading. Any variant aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to scan bundle root {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read manifest for bundle '{bundle}': {source}")]
    Read {
        bundle: String,
        source: std::io::Error,
    },

    #[error("invalid manifest for bundle '{bundle}': {source}")]
    Parse {
        bundle: String,
        source: serde_json::Error,
    },

    #[error("duplicate bundle identifier '{0}'")]
    DuplicateIdentifier(String),
}

/// Scan `root` and load every bundle that carries a manifest.
///
/// Returns the loaded set in enumeration order, or the first fatal error.
/// The caller gets either the complete set or nothing.
pub fn load_manifests(root: &Path) -> Result<Vec<LoadedPoc>, ManifestError> {
    let entries = fs::read_dir(root).map_err(|source| ManifestError::Scan {
        path: root.to_path_buf(),
        source,
    })?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut pocs = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| ManifestError::Scan {
            path: root.to_path_buf(),
            source,
        })?;
        let content_root = entry.path();
        if !content_root.is_dir() {
            continue;
        }

        let manifest_path = content_root.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            // Not a bundle.
            continue;
        }

        let identifier = entry.file_name().to_string_lossy().into_owned();
        let raw = fs::read_to_string(&manifest_path).map_err(|source| ManifestError::Read {
            bundle: identifier.clone(),
            source,
        })?;
        let manifest: PocManifest =
            serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
                bundle: identifier.clone(),
                source,
            })?;

        // Directory names are unique, so this only fires if enumeration ever
        // yields the same name twice; fail loudly rather than shadow.
        if !seen.insert(identifier.clone()) {
            return Err(ManifestError::DuplicateIdentifier(identifier));
        }

        tracing::debug!(bundle = %identifier, "Loaded manifest");
        pocs.push(LoadedPoc {
            identifier,
            manifest,
            content_root,
        });
    }

    Ok(pocs)
}
