//! Catalog Model

use serde::{Deserialize, Serialize};

/// Shipping method enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Pickup,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Pickup => "pickup",
        }
    }
}

/// Purchasable product definition
///
/// Defined once at startup and never mutated; looked up by `sku`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSku {
    /// Unique SKU id, e.g. "tomato-5lb"
    pub sku: String,
    pub name: String,
    /// Display label for one unit, e.g. "5 lb box"
    pub unit_label: String,
    /// Weight of one unit in pounds
    pub unit_weight_lb: f64,
    /// Price of one unit in USD dollars
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_per_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
