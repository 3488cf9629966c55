//! Bulk Discount Tier Model

use serde::{Deserialize, Serialize};

/// Weight threshold granting an automatic percentage discount
///
/// Tiers are kept ordered descending by `min_lb`; the first tier whose
/// threshold the order weight meets wins. Tiers never stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkTier {
    /// Minimum total order weight in pounds
    pub min_lb: f64,
    /// Discount rate (0.12 = 12%)
    pub percent: f64,
    /// Display name, also emitted as an order note
    pub name: String,
}
