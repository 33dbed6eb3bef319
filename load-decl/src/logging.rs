//! Subscriber installation for the `load-decl` binary.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::LoadDeclCliError;

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `fallback` is used as the filter.
///
/// # Errors
///
/// Returns [`LoadDeclCliError::Logging`] when the filter is malformed or a
/// global subscriber is already installed.
pub fn init(fallback: &str) -> Result<(), LoadDeclCliError> {
    let filter = build_filter(fallback)?;
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| LoadDeclCliError::Logging(err.to_string()))
}

fn build_filter(fallback: &str) -> Result<EnvFilter, LoadDeclCliError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|err| LoadDeclCliError::Logging(err.to_string()))
}
