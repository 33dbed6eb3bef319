//! Per-fragment failures collected during one gathering call.

use std::{error::Error, fmt, sync::Arc};

use super::DeclError;

/// A fragment that could not be loaded.
#[derive(Clone, Debug)]
pub struct FragmentFailure {
    position: usize,
    fragment: String,
    error: Arc<DeclError>,
}

impl FragmentFailure {
    pub(crate) fn new(position: usize, fragment: impl Into<String>, error: Arc<DeclError>) -> Self {
        Self {
            position,
            fragment: fragment.into(),
            error,
        }
    }

    /// 1-based position of the fragment in the gathered source list.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Path or name of the fragment.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Why the fragment was rejected.
    #[must_use]
    pub fn error(&self) -> &DeclError {
        &self.error
    }

    pub(crate) fn into_error(self) -> Arc<DeclError> {
        self.error
    }
}

/// Every fragment that failed in one gathering call, in source order.
///
/// # Examples
///
/// ```
/// use load_decl::{DeclError, FragmentSource, gather_declarations};
///
/// let err = gather_declarations(
///     None,
///     &[
///         FragmentSource::inline("good", "- sf_object: Account\n"),
///         FragmentSource::inline("bad-field", "- sf_object: Account\n  colour: red\n"),
///         FragmentSource::inline("bad-api", "- sf_object: Account\n  api: soap\n"),
///     ],
/// )
/// .unwrap_err();
/// let DeclError::Aggregate(failures) = &*err else { panic!("expected aggregate") };
/// let positions: Vec<usize> = failures.iter().map(|f| f.position()).collect();
/// assert_eq!(positions, [2, 3]);
/// assert_eq!(failures.fragments().collect::<Vec<_>>(), ["bad-field", "bad-api"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FragmentFailures(Vec<FragmentFailure>);

impl FragmentFailures {
    pub(crate) const fn new(failures: Vec<FragmentFailure>) -> Self {
        Self(failures)
    }

    /// Iterate over the failures in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, FragmentFailure> {
        self.0.iter()
    }

    /// Labels of the failing fragments, in source order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(FragmentFailure::fragment)
    }

    /// Number of failing fragments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fragment failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FragmentFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.iter().peekable();
        while let Some(failure) = lines.next() {
            write!(
                f,
                "fragment #{} ({}): {}",
                failure.position, failure.fragment, failure.error
            )?;
            if lines.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Error for FragmentFailures {}

impl<'a> IntoIterator for &'a FragmentFailures {
    type Item = &'a FragmentFailure;
    type IntoIter = std::slice::Iter<'a, FragmentFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
