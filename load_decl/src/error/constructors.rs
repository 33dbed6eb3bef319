//! Constructors for `DeclError`.

use std::sync::Arc;

use super::{DeclError, FragmentFailure, FragmentFailures};

impl DeclError {
    /// Construct a validation error for `fragment`.
    #[must_use]
    pub fn validation(fragment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// Construct a YAML syntax error for `fragment`.
    #[must_use]
    pub fn yaml(
        fragment: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Yaml {
            fragment: fragment.into(),
            source: source.into(),
        }
    }

    /// Report the fragments that failed in one gathering call.
    ///
    /// No failures yield `None`. A lone failing fragment is reported as its
    /// own error; several are wrapped in [`DeclError::Aggregate`].
    pub(crate) fn from_failures(mut failures: Vec<FragmentFailure>) -> Option<Arc<Self>> {
        if failures.len() > 1 {
            return Some(Arc::new(Self::Aggregate(Box::new(FragmentFailures::new(
                failures,
            )))));
        }
        failures.pop().map(FragmentFailure::into_error)
    }
}
