//! Error types for `load-decl`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use load_decl::DeclError;
use thiserror::Error;

/// Errors surfaced by the `load-decl` command.
#[derive(Debug, Error)]
pub enum LoadDeclCliError {
    /// The settings file could not be read or is not valid TOML.
    #[error("settings file error in '{path}': {source}")]
    ConfigFile {
        /// Path passed with `--config`.
        path: Utf8PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Layered settings could not be extracted.
    #[error("invalid settings: {0}")]
    Settings(#[source] Box<figment::Error>),

    /// Declaration files failed to load or unify.
    #[error(transparent)]
    Declarations(#[from] Arc<DeclError>),

    /// The result could not be rendered as JSON.
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// The log filter was rejected or a subscriber was already installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for LoadDeclCliError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}
