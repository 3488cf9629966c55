//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then
//! converted back to `f64` for the serialized breakdown. Every
//! computation boundary (line subtotal, subtotal, discounts, shipping,
//! tax, total) rounds to 2 decimal places - rounding is never deferred
//! to the end.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a currency amount to 2 decimal places (half-up)
#[inline]
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Clamp a requested quantity into a SKU's per-order bounds
#[inline]
pub fn clamp_quantity(quantity: i64, min: i64, max: i64) -> i64 {
    quantity.clamp(min, max)
}
