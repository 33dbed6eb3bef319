//! Primary error enum for declaration loading flows.

use camino::Utf8PathBuf;
use thiserror::Error;

use super::aggregate::FragmentFailures;

/// Errors that can occur while loading or unifying load declarations.
///
/// The merge algebra itself is total, so every variant describes a problem
/// with the input fragments rather than with unification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeclError {
    /// A declaration file could not be read.
    #[error("Load declaration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A fragment is not syntactically valid YAML.
    #[error("Failed to parse YAML in '{fragment}': {source}")]
    Yaml {
        /// Label of the offending fragment.
        fragment: String,
        /// Error reported by the YAML parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A fragment does not match the declaration schema.
    #[error("Invalid load declaration in '{fragment}': {message}")]
    Validation {
        /// Label of the offending fragment.
        fragment: String,
        /// Human-readable explanation of the schema violation.
        message: String,
    },

    /// A fragment carries more than one channel declaration group.
    #[error(
        "Only one channel declaration list allowed per file: '{fragment}' declares {count}"
    )]
    FragmentStructure {
        /// Label of the offending fragment.
        fragment: String,
        /// Number of channel declaration groups found.
        count: usize,
    },

    /// The same user owns channels in more than one place.
    #[error("Channel user '{user}' is declared more than once (again in '{fragment}')")]
    DuplicateChannelUser {
        /// User named by the repeated channel declaration.
        user: String,
        /// Fragment holding the repeated declaration.
        fragment: String,
    },

    /// More than one fragment failed to load.
    #[error("{count} load declaration fragments failed:\n{0}", count = .0.len())]
    Aggregate(Box<FragmentFailures>),
}
