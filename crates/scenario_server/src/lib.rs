//! REST API server for the energy mix scenario calculator
//!
//! This crate exposes `scenario_core` over HTTP so that a dashboard front end
//! can recompute metrics on every input change. Each request is evaluated
//! independently; no per-session state is held on the server.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export the calculator for integration
pub use scenario_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
