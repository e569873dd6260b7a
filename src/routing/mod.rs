//! Bundle routing subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<LoadedPoc> (immutable snapshot from the manifest loader)
//!     → factory.rs (one isolated Router per bundle)
//!     → mount.rs (nest each under /<prefix>/<identifier>)
//!     → top-level axum Router, frozen before the listener accepts
//! ```
//!
//! # Design Decisions
//! - Routers are compiled at startup and immutable at runtime
//! - Header layers live inside the one router built from their descriptor,
//!   so isolation between bundles holds by construction
//! - Any construction failure aborts startup; nothing is mounted partially

pub mod factory;
pub mod mount;

pub use factory::{poc_router, FactoryError};
pub use mount::{mount_pocs, MountError};
