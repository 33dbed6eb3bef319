//! Locating the declaration file that accompanies a recipe.

use camino::{Utf8Path, Utf8PathBuf};

/// Suffix of declaration files inferred from a recipe path.
pub const LOAD_FILE_SUFFIX: &str = ".load.yml";

/// Returns the declaration file conventionally paired with `recipe`.
///
/// Every suffix of the recipe's file name is replaced with `.load.yml`, in
/// the same directory. Names without a suffix have no paired file. The
/// returned path is not checked for existence.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use load_decl::infer_load_file_path;
///
/// assert_eq!(
///     infer_load_file_path(Utf8Path::new("recipes/accounts.recipe.yml")).as_deref(),
///     Some(Utf8Path::new("recipes/accounts.load.yml")),
/// );
/// assert_eq!(infer_load_file_path(Utf8Path::new("Makefile")), None);
/// ```
#[must_use]
pub fn infer_load_file_path(recipe: &Utf8Path) -> Option<Utf8PathBuf> {
    let file_name = recipe.file_name()?;
    // A leading dot marks a hidden file, not a suffix.
    let stem_len = file_name
        .char_indices()
        .skip(1)
        .find_map(|(idx, ch)| (ch == '.').then_some(idx))?;
    let stem = file_name.get(..stem_len)?;
    Some(recipe.with_file_name(format!("{stem}{LOAD_FILE_SUFFIX}")))
}
