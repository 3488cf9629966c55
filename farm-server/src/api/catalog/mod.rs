//! Catalog API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/catalog", get(handler::list_catalog))
        .route("/api/coupons", get(handler::list_coupons))
}
