//! Logging configuration.
//!
//! The engine emits structured `tracing` events and never installs a
//! subscriber itself. Binaries and demos call [`init_logging`] once at
//! startup.
//!
//! # Events
//!
//! - `debug`: state registration, initial state assignment, transitions
//! - `trace`: each entry listener invocation
//! - `warn`: rejected initial states and rejected transitions
//!
//! # Environment Variables
//!
//! - `STATECRAFT_LOG_LEVEL`: Log level or filter directive (default `info`)
//! - `RUST_LOG`: Standard `tracing-subscriber` filter, used when the above is unset
//! - `STATECRAFT_LOG_FORMAT`: `compact`, `pretty` or `json` (default `compact`)
//!
//! ```bash
//! # Show every transition of the engine
//! STATECRAFT_LOG_LEVEL="info,statecraft::machine=debug" cargo run --example plugin_install
//! ```

use std::str::FromStr;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Resolve the filter directive from the argument, then the environment.
fn resolve_level(level: Option<&str>) -> String {
    level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STATECRAFT_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string())
}

fn resolve_format(format: Option<&str>) -> String {
    format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STATECRAFT_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string())
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional filter directive (trace|debug|info|warn|error|off, or
///   a full `EnvFilter` directive). If None, uses `STATECRAFT_LOG_LEVEL` or
///   `RUST_LOG`, or defaults to `info`.
/// * `format` - Optional log format (compact|pretty|json). If None, uses
///   `STATECRAFT_LOG_FORMAT`, or defaults to `compact`.
///
/// # Errors
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = resolve_level(level);
    let format = LogFormat::from_str(&resolve_format(format))
        .map_err(|e| format!("Invalid log format: {}", e))?;

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .compact()
                        .with_target(false)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(fmt::Layer::default().pretty().with_target(true))
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(fmt::Layer::default().json().with_current_span(false))
                .try_init()?;
        }
    }

    Ok(())
}
