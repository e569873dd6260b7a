//! Bundle manifest subsystem.
//!
//! # Data Flow
//! ```text
//! <poc_dir>/<bundle>/manifest.json (one per bundle)
//!     → loader.rs (scan, parse, deduplicate)
//!     → Vec<LoadedPoc> (validated, immutable snapshot)
//!     → consumed by routing (mounting) and http (discovery)
//! ```
//!
//! # Design Decisions
//! - One scan at startup; the snapshot never changes while the process runs
//! - A directory without a manifest is not a bundle, not an error
//! - Any unreadable or malformed manifest fails the whole load; the server
//!   never starts with a partial bundle set

pub mod loader;
pub mod schema;

pub use loader::{load_manifests, ManifestError, MANIFEST_FILE};
pub use schema::{LoadedPoc, PocManifest};
