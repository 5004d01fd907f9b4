//! Structured logging setup for binaries built on the Pixela client

use crate::error::{PixelaError, Result};
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "pixela_client=debug")
    pub level: String,
    /// Compact single-line output instead of the pretty multi-line layout
    pub compact: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: true,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter, preferring `RUST_LOG` when it is set.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration
///
/// Fails if a global subscriber is already installed or the log file cannot be opened.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(config.env_filter());

    let file = config
        .file_path
        .as_ref()
        .map(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
        })
        .transpose()?
        .map(Arc::new);

    let result = match (config.compact, file) {
        (true, Some(file)) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(file),
            )
            .try_init(),
        (true, None) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (false, Some(file)) => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(file),
            )
            .try_init(),
        (false, None) => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| PixelaError::with_source("Failed to install tracing subscriber", e))
}

/// Initialize logging with default configuration at the given level
pub fn init_default_logging(level: impl Into<String>) -> Result<()> {
    init_logging(LoggingConfig {
        level: level.into(),
        ..LoggingConfig::default()
    })
}
