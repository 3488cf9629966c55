//! Pricing input/output values
//!
//! Per-request value objects: the engine consumes a `PricingInput` and
//! returns a `PricingResult`. Both are derived entirely from the input
//! plus the static tables; nothing here is persisted.

use serde::{Deserialize, Serialize};

use super::ShippingMethod;

/// One requested (sku, quantity) pair, as sent by the storefront
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRequest {
    pub sku: String,
    pub quantity: i64,
}

/// Raw order input for a pricing call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    /// Order matters for output item order only
    #[serde(default)]
    pub items: Vec<ItemRequest>,
    #[serde(default)]
    pub shipping_method: Option<ShippingMethod>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub new_customer: Option<bool>,
}

/// One priced row in the order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub sku: String,
    pub name: String,
    pub unit_price: f64,
    pub unit_label: String,
    /// Quantity after clamping to the SKU's per-order bounds
    pub quantity: i64,
    pub line_subtotal: f64,
    pub weight_lb: f64,
}

/// Bulk discount portion of the breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkDiscountBreakdown {
    pub percent: f64,
    pub amount: f64,
    pub tier_name: Option<String>,
}

impl BulkDiscountBreakdown {
    pub fn zero() -> Self {
        Self {
            percent: 0.0,
            amount: 0.0,
            tier_name: None,
        }
    }
}

/// Coupon portion of the breakdown
///
/// An ineligible coupon is still reported, with `amount = 0` and a
/// human-readable `reason`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponBreakdown {
    pub code: String,
    pub amount: f64,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Shipping portion of the breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingBreakdown {
    pub method: ShippingMethod,
    pub cost: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capped_at: Option<f64>,
}

/// Tax portion of the breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub rate: f64,
    pub amount: f64,
    pub label: String,
}

/// Full pricing breakdown for an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Always "USD"
    pub currency: String,
    pub items: Vec<LineItem>,
    /// Sum of line subtotals, before any discount
    pub subtotal: f64,
    pub bulk_discount: BulkDiscountBreakdown,
    pub coupon: Option<CouponBreakdown>,
    /// Bulk discount + applied coupon amount
    pub discount_total: f64,
    pub shipping: ShippingBreakdown,
    pub tax: TaxBreakdown,
    pub total_weight_lb: f64,
    pub total: f64,
    /// Advisory display strings, order-sensitive
    pub notes: Vec<String>,
}
