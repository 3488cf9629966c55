//! Pricing API handlers

use axum::{Json, extract::State};
use chrono::Utc;
use shared::models::{PricingInput, PricingResult};

use crate::core::ServerState;

/// POST /api/pricing/quote - price an order without creating it
///
/// Powers the live totals in the order form. Pricing never fails:
/// unknown SKUs and ineligible coupons degrade inside the result.
pub async fn quote(
    State(state): State<ServerState>,
    Json(input): Json<PricingInput>,
) -> Json<PricingResult> {
    let result = state.engine.calculate(&input, Utc::now());
    tracing::debug!(
        items = result.items.len(),
        subtotal = result.subtotal,
        total = result.total,
        "Quote computed"
    );
    Json(result)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::core::{Config, Server, ServerState};

    async fn post_quote(body: serde_json::Value) -> serde_json::Value {
        let app = Server::build_router(ServerState::initialize(&Config::default()));
        let response = app
            .oneshot(
                Request::post("/api/pricing/quote")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn quote_returns_full_breakdown() {
        let body = post_quote(json!({
            "items": [{ "sku": "tomato-5lb", "quantity": 1 }]
        }))
        .await;

        assert_eq!(body["currency"], "USD");
        assert_eq!(body["subtotal"], 20.0);
        assert_eq!(body["shipping"]["cost"], 9.5);
        assert_eq!(body["shipping"]["method"], "standard");
        assert_eq!(body["total"], 29.5);
        assert_eq!(body["coupon"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn quote_with_coupon_and_express() {
        let body = post_quote(json!({
            "items": [{ "sku": "tomato-10lb", "quantity": 2 }],
            "shippingMethod": "express",
            "couponCode": "freshtomato10"
        }))
        .await;

        // 72 subtotal, 10% coupon = 7.20, express 18 + 0.60*20 = 30
        assert_eq!(body["subtotal"], 72.0);
        assert_eq!(body["coupon"]["amount"], 7.2);
        assert_eq!(body["shipping"]["cost"], 30.0);
        assert_eq!(body["total"], 94.8);
    }

    #[tokio::test]
    async fn quote_of_empty_order_degrades() {
        let body = post_quote(json!({ "items": [] })).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 0);
        assert!(
            body["notes"]
                .as_array()
                .unwrap()
                .contains(&json!("No valid items in order"))
        );
    }
}
