//! Logging Infrastructure
//!
//! Structured logging setup for both development and production:
//! - Console output, pretty in development and JSON in production
//! - Optional daily-rotating application log files

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console-only logging
///
/// Convenience wrapper used by tests and local tooling.
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    init_logger_with_file(level, false, None)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level fallback when RUST_LOG is unset (e.g., "info")
/// * `json_format` - JSON output (production) vs pretty output (development)
/// * `log_dir` - Optional directory for daily-rotating file logs
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(rolling_appender(dir)?));
            subscriber.with(console_layer).with(app_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            let app_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(rolling_appender(dir)?));
            subscriber.with(console_layer).with(app_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    }

    Ok(())
}

/// Daily rotating appender under `<dir>/app`
fn rolling_appender(dir: &str) -> anyhow::Result<RollingFileAppender> {
    let app_log_dir = Path::new(dir).join("app");
    fs::create_dir_all(&app_log_dir)?;
    Ok(RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app"))
}
