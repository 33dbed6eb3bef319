//! Library interface for the `load-decl` command.
//!
//! The binary parses [`cli::Args`], resolves [`settings::Settings`] from
//! every layer, installs logging and then calls [`run`], which gathers the
//! configured declaration files and renders the unified load mapping.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod settings;

use load_decl::{FragmentSource, UnificationEngine};
use tracing::info;

use crate::error::LoadDeclCliError;
use crate::output::OutputOptions;
use crate::settings::Settings;

/// Gather, unify and render the declarations named by `settings`.
///
/// # Errors
///
/// Returns [`LoadDeclCliError::Declarations`] when a declaration file is
/// missing or invalid, and [`LoadDeclCliError::Json`] if rendering fails.
pub fn run(settings: &Settings) -> Result<String, LoadDeclCliError> {
    let engine = UnificationEngine::default().with_weights(settings.weights);
    let sources: Vec<FragmentSource> = settings
        .load_declarations
        .iter()
        .cloned()
        .map(FragmentSource::File)
        .collect();
    let gathered = engine.gather(settings.recipe.as_deref(), &sources)?;
    info!(
        files = sources.len(),
        objects = gathered.declarations.len(),
        channels = gathered.channels.len(),
        "unified load declarations"
    );
    let rendered = output::render(
        &gathered,
        OutputOptions {
            compact: settings.compact,
            include_channels: settings.include_channels,
        },
    )?;
    Ok(rendered)
}
