//! Pricing Engine
//!
//! Orchestrates catalog lookup, bulk tiers, coupons, shipping, and tax
//! into one `PricingResult`. Pure and synchronous: no I/O, no locks, no
//! shared mutable state - concurrent calls are fully independent. The
//! only external input besides the order is `now`, used for coupon
//! expiry.
//!
//! The step order is a business rule, not an accident of control flow:
//! line items -> subtotal -> bulk discount -> provisional shipping ->
//! coupon -> free-shipping re-check -> tax -> totals. Reordering changes
//! monetary outcomes.
//!
//! The engine never fails. Unknown SKUs are dropped, quantities are
//! clamped, ineligible coupons degrade to amount 0 with a reason. The
//! only representable failure is an empty item list, which callers must
//! check for themselves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{
    Coupon, CouponBreakdown, CouponKind, LineItem, PricingInput, PricingResult, ShippingMethod,
};

use super::bulk::BulkDiscountPolicy;
use super::catalog::Catalog;
use super::coupons::CouponRegistry;
use super::money::{clamp_quantity, round2, to_decimal, to_f64};
use super::shipping::ShippingPolicy;

const CURRENCY: &str = "USD";

/// Fresh produce is tax-exempt in most states; jurisdictions that need a
/// rate override it through config.
pub const DEFAULT_TAX_RATE: f64 = 0.0;
const TAX_LABEL: &str = "Fresh produce (tax-exempt)";

/// Per-order quantity bounds applied when a SKU leaves them unset
const DEFAULT_MIN_PER_ORDER: i64 = 1;
const DEFAULT_MAX_PER_ORDER: i64 = 999;

/// Pricing Engine - computes the full breakdown for one order
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: Catalog,
    coupons: CouponRegistry,
    bulk: BulkDiscountPolicy,
    shipping: ShippingPolicy,
    tax_rate: f64,
}

impl PricingEngine {
    pub fn new(
        catalog: Catalog,
        coupons: CouponRegistry,
        bulk: BulkDiscountPolicy,
        shipping: ShippingPolicy,
        tax_rate: f64,
    ) -> Self {
        Self {
            catalog,
            coupons,
            bulk,
            shipping,
            tax_rate,
        }
    }

    /// Engine over the published production tables
    pub fn published() -> Self {
        Self::new(
            Catalog::published(),
            CouponRegistry::published(),
            BulkDiscountPolicy::published(),
            ShippingPolicy::default(),
            DEFAULT_TAX_RATE,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn coupons(&self) -> &CouponRegistry {
        &self.coupons
    }

    /// Calculate the full pricing breakdown for an order
    ///
    /// `now` is only consulted for coupon expiry; identical input and a
    /// fixed `now` always yield identical output.
    pub fn calculate(&self, input: &PricingInput, now: DateTime<Utc>) -> PricingResult {
        let shipping_method = input.shipping_method.unwrap_or_default();

        // Step 1: line items - unknown SKUs dropped, quantities clamped
        let items = self.build_line_items(input);

        // Step 2: subtotal is rounded; weight is not a currency value
        let subtotal = round2(items.iter().map(|li| li.line_subtotal).sum());
        let total_weight_lb: f64 = items.iter().map(|li| li.weight_lb).sum();

        // Step 3: bulk discount
        let bulk_discount = self.bulk.compute(subtotal, total_weight_lb);
        let after_bulk = round2((subtotal - bulk_discount.amount).max(0.0));

        // Step 4: provisional shipping, before any coupon effect
        let mut shipping = self
            .shipping
            .compute(after_bulk, total_weight_lb, shipping_method);

        // Step 5: coupon resolution and application
        let coupon_def = self.coupons.find_coupon(input.coupon_code.as_deref());
        let mut coupon = coupon_def.map(|c| {
            self.resolve_coupon(
                c,
                now,
                input.new_customer.unwrap_or(false),
                shipping_method,
                after_bulk,
                shipping.cost,
            )
        });

        // A shipping coupon reduces the shipping cost, never the subtotal
        if let (Some(breakdown), Some(def)) = (coupon.as_mut(), coupon_def)
            && matches!(def.kind, CouponKind::Shipping { .. })
        {
            let apply_amount = round2(shipping.cost.min(breakdown.amount));
            shipping.cost = round2(shipping.cost - apply_amount);
            breakdown.amount = apply_amount;
        }

        // Step 6: fixed/percent coupons reduce the subtotal
        let coupon_subtotal_amount = match (coupon.as_ref(), coupon_def) {
            (Some(breakdown), Some(def))
                if matches!(def.kind, CouponKind::Fixed { .. } | CouponKind::Percent { .. }) =>
            {
                breakdown.amount
            }
            _ => 0.0,
        };
        let subtotal_after_all_discounts =
            round2((after_bulk - coupon_subtotal_amount).max(0.0));

        // Step 7: free-shipping re-check against the post-coupon subtotal.
        // Coupons only ever reduce the subtotal, so this can confirm but
        // never grant free shipping that step 4 denied; it is preserved
        // as-is because the step order is part of the published behavior.
        if shipping_method == ShippingMethod::Standard
            && shipping.cost > 0.0
            && subtotal_after_all_discounts >= self.shipping.free_shipping_threshold
        {
            shipping.cost = 0.0;
            shipping.description = self.shipping.free_standard_description();
        }

        // Step 8: tax on the fully discounted subtotal
        let tax_amount = to_f64(to_decimal(subtotal_after_all_discounts) * to_decimal(self.tax_rate));
        let tax = shared::models::TaxBreakdown {
            rate: self.tax_rate,
            amount: round2(tax_amount),
            label: TAX_LABEL.to_string(),
        };

        // Steps 9-10: totals
        let coupon_amount = coupon.as_ref().map(|c| c.amount).unwrap_or(0.0);
        let discount_total = round2(bulk_discount.amount + coupon_amount);
        let total = round2(subtotal_after_all_discounts + shipping.cost + tax.amount);

        // Step 11: advisory notes, in display order
        let mut notes = Vec::new();
        if bulk_discount.percent > 0.0
            && let Some(name) = &bulk_discount.tier_name
        {
            notes.push(name.clone());
        }
        if shipping.method == ShippingMethod::Standard && shipping.cost == 0.0 {
            notes.push(format!(
                "Free standard shipping threshold met (${})",
                self.shipping.free_shipping_threshold
            ));
        }
        if let Some(c) = &coupon
            && c.amount > 0.0
        {
            notes.push(format!("Coupon applied: {}", c.code));
        }
        if items.is_empty() {
            notes.push("No valid items in order".to_string());
        }

        PricingResult {
            currency: CURRENCY.to_string(),
            items,
            subtotal,
            bulk_discount,
            coupon,
            discount_total,
            shipping,
            tax,
            total_weight_lb,
            total,
            notes,
        }
    }

    fn build_line_items(&self, input: &PricingInput) -> Vec<LineItem> {
        let mut items = Vec::with_capacity(input.items.len());
        for raw in &input.items {
            let detail = match self.catalog.find_sku(&raw.sku) {
                Some(d) => d,
                None => continue,
            };

            let min_q = detail.min_per_order.unwrap_or(DEFAULT_MIN_PER_ORDER);
            let max_q = detail.max_per_order.unwrap_or(DEFAULT_MAX_PER_ORDER);
            let qty = clamp_quantity(raw.quantity, min_q, max_q);
            if qty <= 0 {
                continue;
            }

            let line_subtotal = to_f64(to_decimal(detail.unit_price) * Decimal::from(qty));
            items.push(LineItem {
                sku: detail.sku.clone(),
                name: detail.name.clone(),
                unit_price: detail.unit_price,
                unit_label: detail.unit_label.clone(),
                quantity: qty,
                line_subtotal,
                weight_lb: detail.unit_weight_lb * qty as f64,
            });
        }
        items
    }

    /// Resolve a found coupon against the order: eligibility checks
    /// first, then the kind-specific amount. Ineligible coupons come
    /// back with amount 0 and a reason, and have no monetary effect.
    fn resolve_coupon(
        &self,
        coupon: &Coupon,
        now: DateTime<Utc>,
        new_customer: bool,
        shipping_method: ShippingMethod,
        subtotal_after_bulk: f64,
        current_shipping_cost: f64,
    ) -> CouponBreakdown {
        let rejected = |reason: String| CouponBreakdown {
            code: coupon.code.clone(),
            amount: 0.0,
            label: coupon.label.clone(),
            reason: Some(reason),
        };

        if coupon.is_expired(now) {
            return rejected("Expired".to_string());
        }
        if coupon.requires_new_customer && !new_customer {
            return rejected("New customers only".to_string());
        }
        if let Some(min) = coupon.min_subtotal
            && subtotal_after_bulk < min
        {
            return rejected(format!("Requires ${}+ subtotal", min));
        }

        let amount = match &coupon.kind {
            CouponKind::Shipping { applies_to } => {
                if let Some(methods) = applies_to
                    && !methods.contains(&shipping_method)
                {
                    return rejected("Not valid for chosen shipping".to_string());
                }
                // Cannot exceed the shipping cost being offset
                round2(current_shipping_cost)
            }
            CouponKind::Fixed { amount } => round2(amount.min(subtotal_after_bulk)),
            CouponKind::Percent { percent } => {
                to_f64(to_decimal(subtotal_after_bulk) * to_decimal(*percent))
            }
        };

        CouponBreakdown {
            code: coupon.code.clone(),
            amount,
            label: coupon.label.clone(),
            reason: None,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::published()
    }
}
