//! Where a fragment's text comes from.

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::DeclResult;

use super::error::file_error;

/// A fragment input: a file on disk or an in-memory document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FragmentSource {
    /// Read the fragment from this path.
    File(Utf8PathBuf),
    /// Use these contents, labelled `name` in diagnostics.
    Inline {
        /// Label used in diagnostics.
        name: String,
        /// YAML document text.
        contents: String,
    },
}

impl FragmentSource {
    /// A source that reads `path` when loaded.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// A source backed by in-memory YAML, primarily used by tests and
    /// embedding callers.
    #[must_use]
    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::Inline {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Returns the label used for this source in diagnostics.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.to_string(),
            Self::Inline { name, .. } => name.clone(),
        }
    }

    /// Read the source text.
    pub(super) fn read(&self) -> DeclResult<Cow<'_, str>> {
        match self {
            Self::File(path) => read_file(path)
                .map(Cow::Owned)
                .map_err(|err| file_error(path, err)),
            Self::Inline { contents, .. } => Ok(Cow::Borrowed(contents)),
        }
    }
}

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Open the parent directory of `path` via `cap-std` and read the file by
/// name.
fn read_file(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::other("cannot determine file name for load declaration path")
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    dir.read_to_string(file_name)
}
