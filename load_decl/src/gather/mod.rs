//! Gathering declarations from several fragments into one result.
//!
//! Fragments are read in the order given. Every fragment is parsed before
//! any unification happens so that all broken fragments are reported at
//! once; a gather call either produces a complete result or an error.

mod channels;
mod infer;

use camino::Utf8Path;
use tracing::debug;

pub use infer::{LOAD_FILE_SUFFIX, infer_load_file_path};

use crate::{
    ChannelDeclaration, DeclError, DeclResult, Fragment, FragmentFailure, FragmentSource,
    UnificationEngine, UnifiedDeclarations,
};

use channels::ChannelCollector;

/// Unified sObject declarations together with every declared channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GatheredDeclarations {
    /// One canonical declaration per object.
    pub declarations: UnifiedDeclarations,
    /// Channel declarations in fragment order.
    pub channels: Vec<ChannelDeclaration>,
}

impl UnificationEngine {
    /// Load, validate and unify the given fragments.
    ///
    /// When `sources` is empty and `recipe` has an existing sibling
    /// declaration file (see [`infer_load_file_path`]), that file is used
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns the error of the single failing fragment, or a
    /// [`DeclError::Aggregate`] when several fragments fail. A channel user
    /// declared twice yields [`DeclError::DuplicateChannelUser`].
    pub fn gather(
        &self,
        recipe: Option<&Utf8Path>,
        sources: &[FragmentSource],
    ) -> DeclResult<GatheredDeclarations> {
        let inferred: Vec<FragmentSource> = if sources.is_empty() {
            recipe.and_then(inferred_source).into_iter().collect()
        } else {
            Vec::new()
        };
        let effective = if sources.is_empty() {
            inferred.as_slice()
        } else {
            sources
        };

        let fragments = load_all(effective)?;
        let mut declarations = Vec::new();
        let mut channels = ChannelCollector::default();
        for fragment in fragments {
            let label = fragment.label().to_owned();
            let (sobjects, fragment_channels) = fragment.into_parts();
            declarations.extend(sobjects);
            channels.extend(&label, fragment_channels)?;
        }

        Ok(GatheredDeclarations {
            declarations: self.unify(&declarations),
            channels: channels.finish(),
        })
    }
}

/// Gather with the standard weights and rules.
///
/// # Errors
///
/// See [`UnificationEngine::gather`].
///
/// # Examples
///
/// ```
/// use load_decl::{ApiMode, FragmentSource, gather_declarations};
///
/// let gathered = gather_declarations(
///     None,
///     &[
///         FragmentSource::inline("defaults", "- sf_object: Account\n  api: rest\n"),
///         FragmentSource::inline(
///             "override",
///             "- sf_object: Account\n  priority: high\n  api: bulk\n",
///         ),
///     ],
/// )?;
/// assert_eq!(gathered.declarations["Account"].api, Some(ApiMode::Bulk));
/// # Ok::<_, std::sync::Arc<load_decl::DeclError>>(())
/// ```
pub fn gather_declarations(
    recipe: Option<&Utf8Path>,
    sources: &[FragmentSource],
) -> DeclResult<GatheredDeclarations> {
    UnificationEngine::default().gather(recipe, sources)
}

fn inferred_source(recipe: &Utf8Path) -> Option<FragmentSource> {
    let path = infer_load_file_path(recipe)?;
    if path.is_file() {
        debug!(recipe = %recipe, path = %path, "using inferred load declaration file");
        Some(FragmentSource::File(path))
    } else {
        debug!(recipe = %recipe, path = %path, "no load declaration file next to recipe");
        None
    }
}

fn load_all(sources: &[FragmentSource]) -> DeclResult<Vec<Fragment>> {
    let mut fragments = Vec::with_capacity(sources.len());
    let mut failures = Vec::new();
    for (index, source) in sources.iter().enumerate() {
        match Fragment::load(source) {
            Ok(fragment) => fragments.push(fragment),
            Err(err) => failures.push(FragmentFailure::new(index + 1, source.label(), err)),
        }
    }
    match DeclError::from_failures(failures) {
        Some(err) => Err(err),
        None => Ok(fragments),
    }
}
