//! Catalog - in-memory SKU table with pure lookups
//!
//! Loaded once at startup and treated as read-only for the process
//! lifetime. Catalog edits are handled by redeploy, not at runtime.

use shared::models::CatalogSku;

/// Immutable SKU table
#[derive(Debug, Clone)]
pub struct Catalog {
    skus: Vec<CatalogSku>,
}

impl Catalog {
    /// Build a catalog from an explicit SKU list (tests use synthetic ones)
    pub fn new(skus: Vec<CatalogSku>) -> Self {
        Self { skus }
    }

    /// The published seasonal catalog
    pub fn published() -> Self {
        Self::new(vec![
            CatalogSku {
                sku: "tomato-1lb".to_string(),
                name: "Organic Tomatoes - 1 lb".to_string(),
                unit_label: "1 lb bag".to_string(),
                unit_weight_lb: 1.0,
                unit_price: 4.5,
                min_per_order: None,
                max_per_order: Some(40),
                description: Some(
                    "Perfect for a salad or two - field-ripened, same-week harvest.".to_string(),
                ),
            },
            CatalogSku {
                sku: "tomato-5lb".to_string(),
                name: "Organic Tomatoes - 5 lb".to_string(),
                unit_label: "5 lb box".to_string(),
                unit_weight_lb: 5.0,
                unit_price: 20.0,
                min_per_order: None,
                max_per_order: Some(30),
                description: Some("Great value for families and weekly meal prep.".to_string()),
            },
            CatalogSku {
                sku: "tomato-10lb".to_string(),
                name: "Organic Tomatoes - 10 lb".to_string(),
                unit_label: "10 lb box".to_string(),
                unit_weight_lb: 10.0,
                unit_price: 36.0,
                min_per_order: None,
                max_per_order: Some(20),
                description: Some("Best for batch cooking, canning, or sharing.".to_string()),
            },
            CatalogSku {
                sku: "tomato-20lb".to_string(),
                name: "Organic Tomatoes - 20 lb".to_string(),
                unit_label: "20 lb crate".to_string(),
                unit_weight_lb: 20.0,
                unit_price: 64.0,
                min_per_order: None,
                max_per_order: Some(10),
                description: Some(
                    "Chef and canner favorite - biggest savings per pound.".to_string(),
                ),
            },
        ])
    }

    /// Look up a SKU by id
    pub fn find_sku(&self, sku: &str) -> Option<&CatalogSku> {
        self.skus.iter().find(|s| s.sku == sku)
    }

    pub fn is_valid_sku(&self, sku: &str) -> bool {
        self.find_sku(sku).is_some()
    }

    /// Defensive copy of the SKU list, in catalog order
    pub fn list(&self) -> Vec<CatalogSku> {
        self.skus.clone()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::published()
    }
}
