//! Shipping Policy - method cost formulas, caps, and the free threshold
//!
//! Standard shipping is weight-based with a cap and a free threshold on
//! the discounted subtotal; express is weight-based with its own cap and
//! never free; farm pickup always costs nothing.

use shared::models::{ShippingBreakdown, ShippingMethod};

use super::money::{to_decimal, to_f64};

/// Shipping rate constants
#[derive(Debug, Clone)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: f64,
    pub standard_base: f64,
    pub standard_per_lb: f64,
    pub standard_cap: f64,
    pub express_base: f64,
    pub express_per_lb: f64,
    pub express_cap: f64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 99.0,
            standard_base: 8.0,
            standard_per_lb: 0.3,
            standard_cap: 29.0,
            express_base: 18.0,
            express_per_lb: 0.6,
            express_cap: 49.0,
        }
    }
}

impl ShippingPolicy {
    /// Compute the provisional shipping cost for an order
    ///
    /// `subtotal_after_discounts` is the post-bulk-discount subtotal at
    /// the time of the call; the engine may later zero the cost via a
    /// shipping coupon or the free-threshold re-check.
    pub fn compute(
        &self,
        subtotal_after_discounts: f64,
        total_lb: f64,
        method: ShippingMethod,
    ) -> ShippingBreakdown {
        match method {
            ShippingMethod::Pickup => ShippingBreakdown {
                method,
                cost: 0.0,
                description: "Free local farm pickup".to_string(),
                free_threshold: None,
                capped_at: None,
            },
            ShippingMethod::Standard => {
                if subtotal_after_discounts >= self.free_shipping_threshold {
                    return ShippingBreakdown {
                        method,
                        cost: 0.0,
                        description: self.free_standard_description(),
                        free_threshold: Some(self.free_shipping_threshold),
                        capped_at: None,
                    };
                }
                let cost = (to_decimal(self.standard_base)
                    + to_decimal(self.standard_per_lb) * to_decimal(total_lb))
                .min(to_decimal(self.standard_cap));
                ShippingBreakdown {
                    method,
                    cost: to_f64(cost),
                    description: format!(
                        "Standard: ${} + ${:.2}/lb (cap ${})",
                        self.standard_base, self.standard_per_lb, self.standard_cap
                    ),
                    free_threshold: Some(self.free_shipping_threshold),
                    capped_at: Some(self.standard_cap),
                }
            }
            ShippingMethod::Express => {
                let cost = (to_decimal(self.express_base)
                    + to_decimal(self.express_per_lb) * to_decimal(total_lb))
                .min(to_decimal(self.express_cap));
                ShippingBreakdown {
                    method,
                    cost: to_f64(cost),
                    description: format!(
                        "Express: ${} + ${:.2}/lb (cap ${})",
                        self.express_base, self.express_per_lb, self.express_cap
                    ),
                    free_threshold: None,
                    capped_at: Some(self.express_cap),
                }
            }
        }
    }

    /// Display string for standard shipping at or above the threshold
    pub fn free_standard_description(&self) -> String {
        format!(
            "Free standard shipping on ${}+",
            self.free_shipping_threshold
        )
    }
}
