//! YAML parsing backed by `serde-saphyr`.

use serde_json::Value;
use serde_saphyr::Options;

use crate::DeclResult;
use crate::result_ext::YamlResultExt;

/// Parse one YAML document into a JSON value using YAML 1.2 strict boolean
/// semantics, so `yes` and `on` stay strings.
///
/// Blank documents parse as `null`.
pub(super) fn parse_document(label: &str, contents: &str) -> DeclResult<Value> {
    if contents.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .into_yaml(label)
}
