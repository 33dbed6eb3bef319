//! Case-insensitive keyword parsing shared by the declaration enums.

use thiserror::Error;

/// A keyword attribute carried a value outside its closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} '{value}'; expected one of {expected}")]
pub struct UnknownKeyword {
    /// Attribute whose value was rejected.
    pub field: &'static str,
    /// Value as written in the fragment.
    pub value: String,
    /// Human-readable list of accepted values.
    pub expected: &'static str,
}

impl UnknownKeyword {
    pub(crate) fn new(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            field,
            value: value.to_owned(),
            expected,
        }
    }
}

/// Lower-case `value` so `HIGH`, `High` and `high` select the same keyword.
pub(crate) fn normalise(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}
