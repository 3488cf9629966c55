//! Coupon Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShippingMethod;

/// Discount kind - tagged so a percent coupon always carries its rate
/// and a fixed coupon always carries its amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CouponKind {
    /// Percentage off the post-bulk-discount subtotal (0.10 = 10%)
    Percent { percent: f64 },
    /// Fixed dollar amount off the post-bulk-discount subtotal
    Fixed { amount: f64 },
    /// Offsets the shipping cost, optionally restricted to methods
    Shipping {
        #[serde(
            rename = "appliesToShippingMethod",
            skip_serializing_if = "Option::is_none"
        )]
        applies_to: Option<Vec<ShippingMethod>>,
    },
}

/// Promotion definition
///
/// Codes are matched case-insensitively after trimming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub code: String,
    #[serde(flatten)]
    pub kind: CouponKind,
    /// Lower bound on the post-bulk-discount subtotal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub requires_new_customer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub label: String,
}

impl Coupon {
    /// True iff the coupon has an expiry instant that `now` has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(exp) => now > exp,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coupon(expires_at: Option<DateTime<Utc>>) -> Coupon {
        Coupon {
            code: "TEST".to_string(),
            kind: CouponKind::Fixed { amount: 5.0 },
            min_subtotal: None,
            requires_new_customer: false,
            expires_at,
            label: "Test".to_string(),
        }
    }

    #[test]
    fn never_expires_without_instant() {
        let c = coupon(None);
        assert!(!c.is_expired(Utc::now()));
    }

    #[test]
    fn expires_strictly_after_instant() {
        let exp = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let c = coupon(Some(exp));
        assert!(!c.is_expired(exp));
        assert!(c.is_expired(exp + chrono::Duration::seconds(1)));
    }
}
