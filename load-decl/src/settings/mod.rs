//! Layered settings for `load-decl`.
//!
//! Values are merged with `figment` in increasing precedence: built-in
//! defaults, the optional TOML file named by `--config`, `LOAD_DECL_*`
//! environment variables (nested keys split on `__`, so
//! `LOAD_DECL_WEIGHTS__HIGH=5` sets `weights.high`), then command-line
//! flags. Flags that were not passed leave lower layers untouched.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use load_decl::PriorityWeights;
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::error::LoadDeclCliError;

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "LOAD_DECL_";

/// Log filter used when neither `RUST_LOG` nor any layer sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Recipe used to infer the declaration file.
    pub recipe: Option<Utf8PathBuf>,
    /// Declaration files, in processing order.
    pub load_declarations: Vec<Utf8PathBuf>,
    /// Emit single-line JSON.
    pub compact: bool,
    /// Emit channel declarations alongside the load mapping.
    pub include_channels: bool,
    /// Fallback log filter.
    pub log_level: String,
    /// Priority weight table for the unification engine.
    pub weights: PriorityWeights,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipe: None,
            load_declarations: Vec::new(),
            compact: false,
            include_channels: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            weights: PriorityWeights::default(),
        }
    }
}

/// The command-line layer. Absent flags serialize to nothing.
#[derive(Debug, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    recipe: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_declarations: Option<Vec<Utf8PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_channels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

impl From<&Args> for CliOverrides {
    fn from(args: &Args) -> Self {
        Self {
            recipe: args.recipe.clone(),
            load_declarations: (!args.load_declarations.is_empty())
                .then(|| args.load_declarations.clone()),
            compact: args.should_compact.then_some(true),
            include_channels: args.should_include_channels.then_some(true),
            log_level: args.log_level.clone(),
        }
    }
}

/// Merge every settings layer for `args`.
///
/// # Errors
///
/// Returns [`LoadDeclCliError::ConfigFile`] when the `--config` file cannot
/// be read or parsed and [`LoadDeclCliError::Settings`] when the merged
/// layers do not form valid settings.
pub fn load_settings(args: &Args) -> Result<Settings, LoadDeclCliError> {
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));
    if let Some(path) = &args.config {
        figment = figment.merge(config_file_layer(path)?);
    }
    let settings = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(CliOverrides::from(args)))
        .extract()?;
    Ok(settings)
}

fn config_file_layer(path: &Utf8Path) -> Result<Figment, LoadDeclCliError> {
    let config_error = |source: Box<dyn std::error::Error + Send + Sync>| {
        LoadDeclCliError::ConfigFile {
            path: path.to_path_buf(),
            source,
        }
    };
    let data = std::fs::read_to_string(path).map_err(|e| config_error(e.into()))?;
    // Parse here so syntax errors name the file before figment re-parses it.
    toml::from_str::<toml::Table>(&data).map_err(|e| config_error(e.into()))?;
    Ok(Figment::from(Toml::string(&data)))
}
