//! Order Pricing
//!
//! Pure pricing over immutable policy tables. The engine composes the
//! catalog, bulk tiers, coupon registry, and shipping rates into a full
//! breakdown; the surrounding HTTP layer only ever hands it validated
//! input.

pub mod bulk;
pub mod catalog;
pub mod coupons;
pub mod engine;
pub mod money;
pub mod shipping;

pub use bulk::BulkDiscountPolicy;
pub use catalog::Catalog;
pub use coupons::CouponRegistry;
pub use engine::PricingEngine;
pub use shipping::ShippingPolicy;
