//! Shared server state

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashSet;

use crate::core::Config;
use crate::pricing::{
    BulkDiscountPolicy, Catalog, CouponRegistry, PricingEngine, ShippingPolicy,
};

/// Per-process newsletter subscriber set
///
/// Deduplicates signups within one instance. Deliberately not durable:
/// real list management lives with the email provider, and losing the
/// set on restart only costs a duplicate "thanks" message.
#[derive(Debug, Default)]
pub struct NewsletterStore {
    emails: DashSet<String>,
}

impl NewsletterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a normalized email; returns true if it was already present
    pub fn subscribe(&self, email: &str) -> bool {
        !self.emails.insert(email.to_string())
    }

    pub fn is_subscribed(&self, email: &str) -> bool {
        self.emails.contains(email)
    }
}

/// Server state - shared references for all handlers
///
/// The pricing tables are built once at startup and read-only for the
/// process lifetime; catalog or coupon edits ship by redeploy. Cloning
/// is cheap (Arc all the way down).
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<PricingEngine>,
    pub newsletter: Arc<NewsletterStore>,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state over the published tables, honoring config overrides
    pub fn initialize(config: &Config) -> Self {
        let engine = PricingEngine::new(
            Catalog::published(),
            CouponRegistry::published(),
            BulkDiscountPolicy::published(),
            ShippingPolicy::default(),
            config.tax_rate,
        );

        tracing::info!(
            skus = engine.catalog().list().len(),
            coupons = engine.coupons().list().len(),
            tax_rate = config.tax_rate,
            "Pricing tables loaded"
        );

        Self {
            engine: Arc::new(engine),
            newsletter: Arc::new(NewsletterStore::new()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_store_deduplicates() {
        let store = NewsletterStore::new();
        assert!(!store.subscribe("a@farm.test"));
        assert!(store.subscribe("a@farm.test"));
        assert!(store.is_subscribed("a@farm.test"));
        assert!(!store.is_subscribed("b@farm.test"));
    }
}
