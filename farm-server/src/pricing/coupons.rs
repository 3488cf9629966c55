//! Coupon Registry - published promotion codes and lookup
//!
//! Codes are normalized (trimmed, upper-cased) before lookup, so client
//! casing never matters. Unknown or empty codes resolve to "no coupon".

use shared::models::{Coupon, CouponKind, ShippingMethod};

/// Immutable promotion table
#[derive(Debug, Clone)]
pub struct CouponRegistry {
    coupons: Vec<Coupon>,
}

/// Normalize a raw coupon code: trim, upper-case, empty becomes None
pub fn normalize_code(code: Option<&str>) -> Option<String> {
    let norm = code?.trim().to_uppercase();
    if norm.is_empty() { None } else { Some(norm) }
}

impl CouponRegistry {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// The published promotion list
    pub fn published() -> Self {
        Self::new(vec![
            Coupon {
                code: "FRESHTOMATO10".to_string(),
                kind: CouponKind::Percent { percent: 0.1 },
                min_subtotal: Some(25.0),
                requires_new_customer: false,
                expires_at: None,
                label: "10% off fresh pickings".to_string(),
            },
            Coupon {
                code: "HARVEST20".to_string(),
                kind: CouponKind::Percent { percent: 0.2 },
                min_subtotal: Some(80.0),
                requires_new_customer: false,
                expires_at: None,
                label: "20% off harvest orders $80+".to_string(),
            },
            Coupon {
                code: "WELCOME5".to_string(),
                kind: CouponKind::Fixed { amount: 5.0 },
                min_subtotal: Some(20.0),
                requires_new_customer: true,
                expires_at: None,
                label: "Welcome bonus $5 off".to_string(),
            },
            Coupon {
                code: "FREESHIP".to_string(),
                kind: CouponKind::Shipping {
                    applies_to: Some(vec![ShippingMethod::Standard]),
                },
                min_subtotal: Some(45.0),
                requires_new_customer: false,
                expires_at: None,
                label: "Free standard shipping $45+".to_string(),
            },
            Coupon {
                code: "LOCALPICKUP".to_string(),
                kind: CouponKind::Shipping {
                    applies_to: Some(vec![ShippingMethod::Pickup]),
                },
                min_subtotal: None,
                requires_new_customer: false,
                expires_at: None,
                label: "Free local pickup".to_string(),
            },
        ])
    }

    /// Look up a coupon by raw (unnormalized) code
    pub fn find_coupon(&self, code: Option<&str>) -> Option<&Coupon> {
        let norm = normalize_code(code)?;
        self.coupons.iter().find(|c| c.code.to_uppercase() == norm)
    }

    /// Defensive copy of the coupon list
    pub fn list(&self) -> Vec<Coupon> {
        self.coupons.clone()
    }
}

impl Default for CouponRegistry {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        let registry = CouponRegistry::published();
        assert!(registry.find_coupon(Some("freshtomato10")).is_some());
        assert!(registry.find_coupon(Some("  FreshTomato10  ")).is_some());
        assert!(registry.find_coupon(Some("NOTREAL")).is_none());
    }

    #[test]
    fn empty_and_missing_codes_resolve_to_none() {
        let registry = CouponRegistry::published();
        assert!(registry.find_coupon(None).is_none());
        assert!(registry.find_coupon(Some("")).is_none());
        assert!(registry.find_coupon(Some("   ")).is_none());
    }

    #[test]
    fn published_coupon_kinds() {
        let registry = CouponRegistry::published();
        let freeship = registry.find_coupon(Some("FREESHIP")).unwrap();
        assert!(matches!(
            freeship.kind,
            CouponKind::Shipping { applies_to: Some(ref m) } if m == &[ShippingMethod::Standard]
        ));
        let welcome = registry.find_coupon(Some("WELCOME5")).unwrap();
        assert!(welcome.requires_new_customer);
    }
}
