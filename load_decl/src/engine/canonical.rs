//! Canonical, fully resolved declarations.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ApiMode, AttributeValue, BulkMode, ResolvedValue};

/// The single resolved load configuration for one object.
///
/// Attributes no declaration touched stay unset.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CanonicalDeclaration {
    /// Object the declaration applies to.
    pub sf_object: String,
    /// Resolved API mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiMode>,
    /// Resolved batch size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    /// Resolved Bulk API concurrency mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_mode: Option<BulkMode>,
    /// Resolved anchor date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_date: Option<String>,
    /// Objects to load first, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub load_after: Vec<String>,
}

impl CanonicalDeclaration {
    /// An unset declaration for `sf_object`.
    #[must_use]
    pub fn new(sf_object: impl Into<String>) -> Self {
        Self {
            sf_object: sf_object.into(),
            ..Self::default()
        }
    }

    /// Populate attributes from one slot's resolution.
    ///
    /// Single-valued attributes keep the earliest value when a slot holds a
    /// list; `load_after` takes every value in order.
    pub(crate) fn apply(&mut self, resolved: ResolvedValue) {
        for value in resolved.into_values() {
            match value {
                AttributeValue::Api(api) => {
                    self.api.get_or_insert(api);
                }
                AttributeValue::BulkMode(mode) => {
                    self.bulk_mode.get_or_insert(mode);
                }
                AttributeValue::BatchSize(size) => {
                    self.batch_size.get_or_insert(size);
                }
                AttributeValue::AnchorDate(date) => {
                    self.anchor_date.get_or_insert(date);
                }
                AttributeValue::LoadAfter(sf_object) => self.load_after.push(sf_object),
            }
        }
    }

    /// Render the settings consumed by the loading mapping.
    ///
    /// Keys appear as `api`, `bulk_mode`, `batch_size`, `anchor_date`; unset
    /// attributes are omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use load_decl::{ApiMode, SObjectDeclaration, unify};
    /// use serde_json::json;
    ///
    /// let unified = unify(&[SObjectDeclaration::new("Account")
    ///     .with_api(ApiMode::Bulk)
    ///     .with_batch_size(50)]);
    /// assert_eq!(
    ///     serde_json::Value::Object(unified["Account"].as_mapping()),
    ///     json!({"api": "bulk", "batch_size": 50}),
    /// );
    /// ```
    #[must_use]
    pub fn as_mapping(&self) -> Map<String, Value> {
        let entries = [
            ("api", self.api.map(|api| Value::from(api.as_str()))),
            (
                "bulk_mode",
                self.bulk_mode.map(|mode| Value::from(mode.as_str())),
            ),
            ("batch_size", self.batch_size.map(Value::from)),
            ("anchor_date", self.anchor_date.clone().map(Value::from)),
        ];
        entries
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_owned(), v)))
            .collect()
    }
}
