//! Logging System
//!
//! Structured logging built on the `tracing` crate. The interactive menu owns
//! stdout, so all log output goes to stderr and defaults to `warn` to keep the
//! console quiet unless something is wrong.

use crate::error::BridgeError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text (default: text)
    pub format: String,

    /// Enable colored output (text format only)
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: true,
        }
    }
}

impl LoggingConfig {
    /// Build a config from command line flags.
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit `--log-level` / `--log-format`
    /// 2. `--verbose` / `--quiet` shorthands
    /// 3. Defaults
    pub fn from_flags(
        verbose: bool,
        quiet: bool,
        level: Option<&str>,
        format: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if verbose {
            config.level = "debug".to_string();
        }
        if quiet {
            config.level = "off".to_string();
        }
        if let Some(level) = level {
            config.level = level.to_string();
        }
        if let Some(format) = format {
            config.format = format.to_string();
        }

        config
    }
}

/// Initialize the logging system
///
/// The `TETHER_LOG` environment variable overrides the configured level and
/// accepts full filter directives. `TETHER_LOG_FORMAT` overrides the format.
pub fn init_logging(config: &LoggingConfig) -> Result<(), BridgeError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, BridgeError> {
    if let Ok(filter) = EnvFilter::try_from_env("TETHER_LOG") {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| BridgeError::Logging(format!("invalid log level {:?}: {}", config.level, e)))
}

/// Determine output format from config or environment
fn determine_format(config: &LoggingConfig) -> Result<String, BridgeError> {
    if let Ok(format) = std::env::var("TETHER_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    if config.format != "json" && config.format != "text" {
        return Err(BridgeError::Logging(format!(
            "invalid log format: {} (must be 'json' or 'text')",
            config.format
        )));
    }

    Ok(config.format.clone())
}
