//! Extensions for mapping errors to `DeclResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| DeclError::…(e).into())`
//! patterns when converting external error types into the crate's
//! `DeclResult<T>` alias (`Result<T, Arc<DeclError>>`).

use std::sync::Arc;

use crate::{DeclError, DeclResult};

/// Extension mapping schema failures from `serde_json` into
/// [`DeclError::Validation`] for one item of a named fragment.
pub(crate) trait ValidationResultExt<T> {
    /// Convert `Result<T, serde_json::Error>` into `DeclResult<T>`, naming the
    /// 1-based `item` that failed.
    fn into_validation(self, fragment: &str, item: usize) -> DeclResult<T>;
}

impl<T> ValidationResultExt<T> for Result<T, serde_json::Error> {
    fn into_validation(self, fragment: &str, item: usize) -> DeclResult<T> {
        self.map_err(|e| Arc::new(DeclError::validation(fragment, format!("item {item}: {e}"))))
    }
}

/// Extension mapping YAML syntax failures into [`DeclError::Yaml`].
pub(crate) trait YamlResultExt<T> {
    /// Convert `Result<T, serde_saphyr::Error>` into `DeclResult<T>`.
    fn into_yaml(self, fragment: &str) -> DeclResult<T>;
}

impl<T> YamlResultExt<T> for Result<T, serde_saphyr::Error> {
    fn into_yaml(self, fragment: &str) -> DeclResult<T> {
        self.map_err(|e| Arc::new(DeclError::yaml(fragment, e.to_string())))
    }
}
