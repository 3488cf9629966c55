//! Data models
//!
//! Shared between farm-server and the storefront (via API).
//! Wire field names are camelCase to match the published JSON contract.

pub mod bulk_tier;
pub mod catalog;
pub mod coupon;
pub mod pricing;

// Re-exports
pub use bulk_tier::*;
pub use catalog::*;
pub use coupon::*;
pub use pricing::*;
