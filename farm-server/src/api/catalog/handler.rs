//! Catalog API handlers
//!
//! Read-only listings backing the storefront order form. The tables are
//! process-lifetime constants, so these never fail.

use axum::{Json, extract::State};
use shared::models::{CatalogSku, Coupon};

use crate::core::ServerState;

/// GET /api/catalog - published SKU list, in display order
pub async fn list_catalog(State(state): State<ServerState>) -> Json<Vec<CatalogSku>> {
    Json(state.engine.catalog().list())
}

/// GET /api/coupons - published promotions
pub async fn list_coupons(State(state): State<ServerState>) -> Json<Vec<Coupon>> {
    Json(state.engine.coupons().list())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::core::{Config, Server, ServerState};

    #[tokio::test]
    async fn catalog_lists_published_skus() {
        let app = Server::build_router(ServerState::initialize(&Config::default()));
        let response = app
            .oneshot(Request::get("/api/catalog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[0]["sku"], "tomato-1lb");
        assert_eq!(body[1]["unitPrice"], 20.0);
    }

    #[tokio::test]
    async fn coupons_expose_kind_tags() {
        let app = Server::build_router(ServerState::initialize(&Config::default()));
        let response = app
            .oneshot(Request::get("/api/coupons").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let freeship = body
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["code"] == "FREESHIP")
            .unwrap();
        assert_eq!(freeship["type"], "shipping");
        assert_eq!(freeship["appliesToShippingMethod"][0], "standard");
    }
}
