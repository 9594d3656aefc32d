//! Logging setup for applications using the Subsonic SDK
//!
//! The library itself only emits `tracing` events. Applications that want to
//! see them can install a subscriber through this module.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output, `info` by default
    Development,
    /// Verbose output with source locations, `debug` by default
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidEnv { directive: String, reason: String },
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `SUBSONIC_LOG_LEVEL`: filter directive, e.g. `subsonic_api=debug`
/// - `RUST_LOG`: used when `SUBSONIC_LOG_LEVEL` is not set
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .with(create_env_filter("info")?);

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(create_env_filter("debug")?);

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from `SUBSONIC_LOG_MODE` (silent, development, debug)
///
/// Defaults to Silent when unset or unrecognized.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(mode_from_str(std::env::var("SUBSONIC_LOG_MODE").ok().as_deref()))
}

fn mode_from_str(value: Option<&str>) -> LoggingMode {
    match value {
        Some("development") => LoggingMode::Development,
        Some("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    filter_from(
        std::env::var("SUBSONIC_LOG_LEVEL").ok(),
        std::env::var("RUST_LOG").ok(),
        default_level,
    )
}

/// `SUBSONIC_LOG_LEVEL` first, then `RUST_LOG`, then the mode's default
fn filter_from(
    subsonic_level: Option<String>,
    rust_log: Option<String>,
    default_level: &str,
) -> Result<EnvFilter, LoggingError> {
    let directive = subsonic_level
        .or(rust_log)
        .unwrap_or_else(|| default_level.to_string());

    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidEnv {
        reason: e.to_string(),
        directive,
    })
}
