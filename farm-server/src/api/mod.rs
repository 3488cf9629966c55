//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness and uptime
//! - [`catalog`] - published SKU and coupon listings
//! - [`pricing`] - order quote endpoint
//! - [`orders`] - order creation
//! - [`newsletter`] - newsletter signup

pub mod catalog;
pub mod health;
pub mod newsletter;
pub mod orders;
pub mod pricing;

use axum::Router;

use crate::core::ServerState;

/// Compose all route groups
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(catalog::router())
        .merge(pricing::router())
        .merge(orders::router())
        .merge(newsletter::router())
}
