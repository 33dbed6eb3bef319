//! JSON rendering of gathered declarations.

use load_decl::{GatheredDeclarations, export_mapping};
use serde_json::{Value, json};

/// Shape of the rendered document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OutputOptions {
    /// Emit single-line JSON instead of pretty-printed JSON.
    pub compact: bool,
    /// Wrap the mapping as `{"declarations": ..., "channels": [...]}`.
    pub include_channels: bool,
}

/// Build the output document for `gathered`.
///
/// # Errors
///
/// Returns an error if a channel declaration cannot be serialized.
pub fn to_value(
    gathered: &GatheredDeclarations,
    options: OutputOptions,
) -> Result<Value, serde_json::Error> {
    let declarations = Value::Object(export_mapping(&gathered.declarations));
    if !options.include_channels {
        return Ok(declarations);
    }
    Ok(json!({
        "declarations": declarations,
        "channels": serde_json::to_value(&gathered.channels)?,
    }))
}

/// Render `gathered` as a JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(
    gathered: &GatheredDeclarations,
    options: OutputOptions,
) -> Result<String, serde_json::Error> {
    let document = to_value(gathered, options)?;
    if options.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
}
