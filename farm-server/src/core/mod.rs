//! Core module - server configuration, state, and lifecycle
//!
//! # Module structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared application state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;

use crate::common::logger::init_logger_with_file;

/// Environment setup: dotenv and logging
///
/// Must run before `Config::from_env` so a `.env` file can supply the
/// variables it reads.
pub fn setup_environment() -> anyhow::Result<()> {
    // Missing .env is fine; real environments set variables directly
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(&level, environment == "production", log_dir.as_deref())
}
