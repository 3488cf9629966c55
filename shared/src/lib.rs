//! Shared types for the farmstand service
//!
//! Data models exchanged between the pricing engine, the HTTP API and
//! the storefront. Pure values, no I/O.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
