//! Global `tracing` subscriber setup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive, e.g. `pixelsmith_core=debug`.
pub const LOG_ENV: &str = "PIXELSMITH_LOG";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the fmt subscriber on stderr.
///
/// `PIXELSMITH_LOG` takes precedence over `fallback` (the configured level).
/// Logs go to stderr so stdout carries only menu text and pixel dumps.
pub fn init_tracing(fallback: &str) -> Result<(), InitError> {
    INITIALISED
        .set(())
        .map_err(|_| InitError::AlreadyInitialised)?;

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback).map_err(|source| InitError::Filter {
            directive: fallback.to_string(),
            source,
        })?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| InitError::AlreadyInitialised)
}

/// Errors emitted when configuring the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("tracing has already been initialised")]
    AlreadyInitialised,
    #[error("invalid log filter `{directive}`: {source}")]
    Filter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
}
