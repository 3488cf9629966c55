//! Order creation handler
//!
//! Validate-before-price: the request is checked field by field, then
//! handed to the pricing engine, which cannot fail. Orders are not
//! persisted or charged here - the response is a priced confirmation
//! for the storefront to display.

use axum::{Json, extract::State};
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::models::{ItemRequest, PricingInput, PricingResult, ShippingMethod};

use crate::common::{AppError, AppResult};
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NOTE_LEN, is_valid_phone, is_valid_postal_code, normalize_phone, sanitize_note,
    validate_email, validate_name,
};

/// Order id suffix alphabet: no 0/O/1/I lookalikes
const ORDER_ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const ORDER_ID_SUFFIX_LEN: usize = 6;

const PICKUP_LOCATION: &str = "On-farm pickup, 123 Country Lane, Yourtown";
const PICKUP_WINDOW: &str = "9:00 AM - 12:00 PM";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub postal_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemRequest>,
    #[serde(default)]
    pub shipping_method: Option<ShippingMethod>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub new_customer: Option<bool>,
    #[serde(default)]
    pub address: Option<AddressRequest>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub newsletter_opt_in: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEcho {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub newsletter_opt_in: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Fulfillment {
    Pickup {
        date: DateTime<Utc>,
        window: &'static str,
        location: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Shipped {
        address: Address,
        estimated_delivery_date: DateTime<Utc>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub received_at: DateTime<Utc>,
    pub customer: CustomerEcho,
    pub pricing: PricingResult,
    pub fulfillment: Fulfillment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// POST /api/orders - validate, price, and confirm an order
pub async fn create_order(
    State(state): State<ServerState>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<Json<OrderResponse>> {
    let parsed = validate_order(&payload)?;
    let now = Utc::now();

    let pricing = state.engine.calculate(&parsed.input, now);
    if pricing.items.is_empty() {
        return Err(AppError::Validation(
            "No valid items in order".to_string(),
        ));
    }

    if payload.newsletter_opt_in {
        state.newsletter.subscribe(&parsed.email);
    }

    let order_id = generate_order_id(now);
    let method = parsed.input.shipping_method.unwrap_or_default();
    let fulfillment = build_fulfillment(method, parsed.address, now)?;

    tracing::info!(
        order_id = %order_id,
        items = pricing.items.len(),
        total = pricing.total,
        method = method.as_str(),
        "Order accepted"
    );

    Ok(Json(OrderResponse {
        order_id,
        received_at: now,
        customer: CustomerEcho {
            name: parsed.name,
            email: parsed.email,
            phone: parsed.phone,
            newsletter_opt_in: payload.newsletter_opt_in,
        },
        pricing,
        fulfillment,
        notes: parsed.notes,
    }))
}

struct ParsedOrder {
    name: String,
    email: String,
    phone: Option<String>,
    input: PricingInput,
    address: Option<Address>,
    notes: Option<String>,
}

/// Field validation, collecting every problem before rejecting
fn validate_order(payload: &OrderRequest) -> Result<ParsedOrder, AppError> {
    let mut errors = Vec::new();

    let name = validate_name(&payload.name, "Name", &mut errors);
    let email = validate_email(&payload.email, &mut errors);

    let phone = match payload.phone.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => {
            if is_valid_phone(p) {
                Some(normalize_phone(p))
            } else {
                errors.push("A valid phone number is required".to_string());
                None
            }
        }
        _ => None,
    };

    if payload.items.is_empty() {
        errors.push("At least one item is required".to_string());
    }

    let method = payload.shipping_method.unwrap_or_default();
    let address = validate_address(method, payload.address.as_ref(), &mut errors);

    let notes = payload
        .notes
        .as_deref()
        .map(|n| sanitize_note(n, MAX_NOTE_LEN))
        .filter(|n| !n.is_empty());

    if !errors.is_empty() {
        return Err(AppError::validation_details(&errors));
    }

    Ok(ParsedOrder {
        name,
        email,
        phone,
        input: PricingInput {
            items: payload.items.clone(),
            shipping_method: payload.shipping_method,
            coupon_code: payload.coupon_code.clone(),
            new_customer: payload.new_customer,
        },
        address,
        notes,
    })
}

/// Shipped orders need a deliverable address; pickup does not
fn validate_address(
    method: ShippingMethod,
    address: Option<&AddressRequest>,
    errors: &mut Vec<String>,
) -> Option<Address> {
    if method == ShippingMethod::Pickup {
        return None;
    }

    let Some(addr) = address else {
        errors.push("Address is required for shipped orders".to_string());
        return None;
    };

    let line1 = addr.line1.trim();
    let city = addr.city.trim();
    let postal_code = addr.postal_code.trim();

    if line1.is_empty() {
        errors.push("address.line1 is required".to_string());
    }
    if city.is_empty() {
        errors.push("address.city is required".to_string());
    }
    if postal_code.is_empty() {
        errors.push("address.postalCode is required".to_string());
    } else if !is_valid_postal_code(postal_code) {
        errors.push("A valid postal code is required".to_string());
    }

    if line1.is_empty() || city.is_empty() || postal_code.is_empty() {
        return None;
    }

    Some(Address {
        line1: line1.to_string(),
        line2: addr
            .line2
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        city: city.to_string(),
        state: addr
            .state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        postal_code: postal_code.to_string(),
    })
}

/// ORD-YYYYMMDD-XXXXXX with an unambiguous suffix alphabet
fn generate_order_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_ID_SUFFIX_LEN)
        .map(|_| ORDER_ID_ALPHABET[rng.gen_range(0..ORDER_ID_ALPHABET.len())] as char)
        .collect();
    format!("ORD-{}-{}", now.format("%Y%m%d"), suffix)
}

fn build_fulfillment(
    method: ShippingMethod,
    address: Option<Address>,
    now: DateTime<Utc>,
) -> Result<Fulfillment, AppError> {
    match method {
        ShippingMethod::Pickup => Ok(Fulfillment::Pickup {
            date: next_day_of_week(now, Weekday::Sat),
            window: PICKUP_WINDOW,
            location: PICKUP_LOCATION,
        }),
        ShippingMethod::Standard | ShippingMethod::Express => {
            // validate_address guarantees the address for shipped orders
            let address = address
                .ok_or_else(|| AppError::Internal("shipped order without address".to_string()))?;
            let transit_days = if method == ShippingMethod::Express { 1 } else { 3 };
            Ok(Fulfillment::Shipped {
                address,
                estimated_delivery_date: add_business_days(now, transit_days),
            })
        }
    }
}

/// Next occurrence of `target`, always in the future (a week out if today)
fn next_day_of_week(from: DateTime<Utc>, target: Weekday) -> DateTime<Utc> {
    let delta = (target.num_days_from_sunday() as i64 + 7
        - from.weekday().num_days_from_sunday() as i64)
        % 7;
    let delta = if delta == 0 { 7 } else { delta };
    from + Duration::days(delta)
}

/// Advance by `days` weekdays, skipping Saturday and Sunday
fn add_business_days(from: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let mut date = from;
    let mut added = 0;
    while added < days {
        date += Duration::days(1);
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            added += 1;
        }
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::TimeZone;
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::core::{Config, Server, ServerState};

    fn valid_payload() -> serde_json::Value {
        json!({
            "name": "Rosa Diaz",
            "email": "rosa@farm.example",
            "items": [{ "sku": "tomato-5lb", "quantity": 2 }],
            "shippingMethod": "standard",
            "address": {
                "line1": "9 Orchard Way",
                "city": "Yourtown",
                "postalCode": "12345"
            }
        })
    }

    async fn post_order(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let app = Server::build_router(ServerState::initialize(&Config::default()));
        let response = app
            .oneshot(
                Request::post("/api/orders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn accepted_order_is_priced_and_gets_an_id() {
        let (status, body) = post_order(valid_payload()).await;
        assert_eq!(status, StatusCode::OK);

        let order_id = body["orderId"].as_str().unwrap();
        assert!(order_id.starts_with("ORD-"));
        assert_eq!(order_id.len(), "ORD-YYYYMMDD-XXXXXX".len());

        assert_eq!(body["pricing"]["subtotal"], 40.0);
        // 8 + 0.30 * 10
        assert_eq!(body["pricing"]["shipping"]["cost"], 11.0);
        assert_eq!(body["fulfillment"]["method"], "shipped");
        assert_eq!(body["customer"]["email"], "rosa@farm.example");
    }

    #[tokio::test]
    async fn missing_fields_are_all_reported() {
        let (status, body) = post_order(json!({
            "items": [{ "sku": "tomato-5lb", "quantity": 1 }]
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("Name is required"));
        assert!(message.contains("Email is required"));
        assert!(message.contains("Address is required"));
    }

    #[tokio::test]
    async fn pickup_needs_no_address() {
        let mut payload = valid_payload();
        payload["shippingMethod"] = json!("pickup");
        payload.as_object_mut().unwrap().remove("address");

        let (status, body) = post_order(payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fulfillment"]["method"], "pickup");
        assert_eq!(body["pricing"]["shipping"]["cost"], 0.0);
    }

    #[tokio::test]
    async fn order_of_unknown_skus_is_rejected() {
        let mut payload = valid_payload();
        payload["items"] = json!([{ "sku": "zucchini-3lb", "quantity": 2 }]);

        let (status, body) = post_order(payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("No valid items")
        );
    }

    #[tokio::test]
    async fn bad_postal_code_is_rejected() {
        let mut payload = valid_payload();
        payload["address"]["postalCode"] = json!("!!");
        let (status, body) = post_order(payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("valid postal code")
        );
    }

    #[test]
    fn order_ids_use_the_unambiguous_alphabet() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 10, 0, 0).unwrap();
        let id = generate_order_id(now);
        assert!(id.starts_with("ORD-20260821-"));
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), ORDER_ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| ORDER_ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn next_saturday_is_always_in_the_future() {
        // 2026-08-22 is a Saturday
        let saturday = Utc.with_ymd_and_hms(2026, 8, 22, 9, 0, 0).unwrap();
        assert_eq!(
            next_day_of_week(saturday, Weekday::Sat),
            saturday + Duration::days(7)
        );

        let thursday = Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap();
        assert_eq!(
            next_day_of_week(thursday, Weekday::Sat),
            thursday + Duration::days(2)
        );
    }

    #[test]
    fn business_days_skip_weekends() {
        // Thursday + 3 business days = Tuesday
        let thursday = Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap();
        let eta = add_business_days(thursday, 3);
        assert_eq!(eta.weekday(), Weekday::Tue);
        assert_eq!(eta, thursday + Duration::days(5));
    }
}
