//! Bulk Discount Policy - weight-tiered automatic discounts
//!
//! The highest-qualifying tier wins; tiers never stack with each other
//! (they do combine with coupons later in the pricing sequence).

use shared::models::{BulkDiscountBreakdown, BulkTier};

use super::money::{round2, to_decimal, to_f64};

/// Immutable tier table, ordered descending by `min_lb`
#[derive(Debug, Clone)]
pub struct BulkDiscountPolicy {
    tiers: Vec<BulkTier>,
}

impl BulkDiscountPolicy {
    /// Build a policy from explicit tiers, sorted descending by threshold
    pub fn new(mut tiers: Vec<BulkTier>) -> Self {
        tiers.sort_by(|a, b| b.min_lb.total_cmp(&a.min_lb));
        Self { tiers }
    }

    /// The published tier ladder
    pub fn published() -> Self {
        Self::new(vec![
            BulkTier {
                min_lb: 100.0,
                percent: 0.12,
                name: "Farm Partner 12% off (100+ lb)".to_string(),
            },
            BulkTier {
                min_lb: 60.0,
                percent: 0.08,
                name: "Canner 8% off (60+ lb)".to_string(),
            },
            BulkTier {
                min_lb: 30.0,
                percent: 0.05,
                name: "Family 5% off (30+ lb)".to_string(),
            },
        ])
    }

    /// Compute the bulk discount for an order
    ///
    /// Selects the eligible tier with the highest threshold that
    /// `total_lb` meets; no tier means zero discount with no name.
    pub fn compute(&self, subtotal: f64, total_lb: f64) -> BulkDiscountBreakdown {
        let tier = match self.tiers.iter().find(|t| total_lb >= t.min_lb) {
            Some(t) => t,
            None => return BulkDiscountBreakdown::zero(),
        };

        let amount = to_f64(to_decimal(subtotal) * to_decimal(tier.percent));
        BulkDiscountBreakdown {
            percent: tier.percent,
            amount: round2(amount),
            tier_name: Some(tier.name.clone()),
        }
    }
}

impl Default for BulkDiscountPolicy {
    fn default() -> Self {
        Self::published()
    }
}
