//! HTTP server subsystem.
//!
//! # Responsibilities
//! - Assemble the top-level axum Router (discovery API, bundles, dashboard)
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - All routing state is frozen before the listener accepts a connection
//! - The discovery endpoint serves a startup-time projection, never the raw
//!   descriptors

pub mod server;

pub use server::{HttpServer, PocSummary};
