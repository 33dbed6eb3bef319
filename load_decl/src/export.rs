//! Rendering unified declarations for the loading mapping.

use serde_json::{Map, Value};

use crate::UnifiedDeclarations;

/// Render every canonical declaration with
/// [`CanonicalDeclaration::as_mapping`](crate::CanonicalDeclaration::as_mapping),
/// keyed by object name.
///
/// Objects appear in name order; objects without resolved settings map to an
/// empty mapping.
///
/// # Examples
///
/// ```
/// use load_decl::{BulkMode, SObjectDeclaration, export_mapping, unify};
/// use serde_json::json;
///
/// let unified = unify(&[
///     SObjectDeclaration::new("Contact").with_load_after("Account"),
///     SObjectDeclaration::new("Account").with_bulk_mode(BulkMode::Serial),
/// ]);
/// assert_eq!(
///     serde_json::Value::Object(export_mapping(&unified)),
///     json!({"Account": {"bulk_mode": "serial"}, "Contact": {}}),
/// );
/// ```
#[must_use]
pub fn export_mapping(declarations: &UnifiedDeclarations) -> Map<String, Value> {
    declarations
        .iter()
        .map(|(sf_object, canonical)| (sf_object.clone(), Value::Object(canonical.as_mapping())))
        .collect()
}
