//! Server configuration

use crate::pricing::engine::DEFAULT_TAX_RATE;

/// Server configuration
///
/// # Environment variables
///
/// All items can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| production |
/// | LOG_LEVEL | info | Log level fallback when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Directory for daily-rotating file logs |
/// | TAX_RATE | 0 | Sales tax rate (0.07 = 7%) for jurisdictions that tax produce |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | production
    pub environment: String,
    /// Sales tax rate applied to the discounted subtotal
    pub tax_rate: f64,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}
