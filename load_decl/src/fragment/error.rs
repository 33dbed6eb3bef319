//! Error constructors shared by fragment loading helpers.

use camino::Utf8Path;
use std::error::Error;
use std::sync::Arc;

use crate::DeclError;

/// Construct a [`DeclError::File`] for a fragment path.
pub(super) fn file_error(
    path: &Utf8Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<DeclError> {
    Arc::new(DeclError::File {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

/// Construct a [`DeclError::FragmentStructure`] for `fragment`.
pub(super) fn structure_error(fragment: &str, count: usize) -> Arc<DeclError> {
    Arc::new(DeclError::FragmentStructure {
        fragment: fragment.to_owned(),
        count,
    })
}
