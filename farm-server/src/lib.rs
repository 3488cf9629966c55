//! Farmstand Server - farm-direct produce ordering backend
//!
//! # Architecture overview
//!
//! - **Pricing engine** (`pricing`): pure order pricing over immutable
//!   tables - catalog lookup, bulk weight tiers, coupons, shipping, tax
//! - **HTTP API** (`api`): quote, order creation, newsletter signup,
//!   catalog/coupon listing
//! - **Core** (`core`): configuration, shared state, server lifecycle
//!
//! # Module structure
//!
//! ```text
//! farm-server/src/
//! ├── core/          # Config, state, server
//! ├── common/        # Error envelope, logging
//! ├── pricing/       # Pricing engine and policy tables
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Request validation helpers
//! ```

pub mod api;
pub mod common;
pub mod core;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use common::{AppError, AppResponse, AppResult};
pub use core::{Config, Server, ServerState, setup_environment};
pub use pricing::PricingEngine;
