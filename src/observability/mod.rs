//! Logging initialization.
//!
//! The tool logs through `tracing`: services emit debug/info events, the
//! binary installs a `tracing-subscriber` stack writing to stderr so the
//! report on stdout stays clean. Format and filter come from the
//! configuration file with a CLI verbose override.

use crate::{Error, Result};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Newline-delimited JSON, for CI log collectors.
    Json,
}

impl LogFormat {
    /// Parses a format string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Filter directive; overrides `RUST_LOG` when set.
    pub filter: Option<String>,
}

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Initializes process-wide logging.
///
/// The filter resolution order is: configured directive, then `RUST_LOG`,
/// then a default of `confguard=info` (`confguard=debug` with `verbose`).
///
/// # Errors
///
/// Returns an error if logging has already been initialized or the
/// subscriber fails to install.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    if LOGGING_INIT.get().is_some() {
        return Err(Error::OperationFailed {
            operation: "logging_init".to_string(),
            cause: "logging already initialized".to_string(),
        });
    }

    let default_directive = if verbose {
        "confguard=debug"
    } else {
        "confguard=info"
    };
    let filter = config.filter.as_deref().map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        EnvFilter::new,
    );

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
    }

    let _ = LOGGING_INIT.set(());
    Ok(())
}

fn init_error(e: impl std::fmt::Display) -> Error {
    Error::OperationFailed {
        operation: "logging_init".to_string(),
        cause: e.to_string(),
    }
}
