//! Atomic declarations: single (object, key, value) facts.
//!
//! A declaration such as
//!
//! ```yaml
//! - sf_object: Account
//!   api: bulk
//!   batch_size: 50
//! ```
//!
//! implies two atoms, one for `api` and one for `batch_size`, each carrying
//! the declaration's priority weight and the merge rule bound to its key.

use crate::{ApiMode, BulkMode, MergeRule, SObjectDeclaration};

/// Attributes that take part in unification.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AttributeKey {
    /// `api`
    Api,
    /// `bulk_mode`
    BulkMode,
    /// `batch_size`
    BatchSize,
    /// `anchor_date`
    AnchorDate,
    /// `load_after`
    LoadAfter,
}

impl AttributeKey {
    /// Every key, in the order atoms are emitted for one declaration.
    pub const ALL: [Self; 5] = [
        Self::Api,
        Self::BulkMode,
        Self::BatchSize,
        Self::AnchorDate,
        Self::LoadAfter,
    ];

    /// Returns the attribute name used in declaration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::BulkMode => "bulk_mode",
            Self::BatchSize => "batch_size",
            Self::AnchorDate => "anchor_date",
            Self::LoadAfter => "load_after",
        }
    }

    /// Extracts this attribute's value from `decl`, if present.
    #[must_use]
    pub fn extract(self, decl: &SObjectDeclaration) -> Option<AttributeValue> {
        match self {
            Self::Api => decl.api.map(AttributeValue::Api),
            Self::BulkMode => decl.bulk_mode.map(AttributeValue::BulkMode),
            Self::BatchSize => decl.batch_size.map(AttributeValue::BatchSize),
            Self::AnchorDate => decl.anchor_date.clone().map(AttributeValue::AnchorDate),
            Self::LoadAfter => decl.load_after.clone().map(AttributeValue::LoadAfter),
        }
    }
}

/// Value carried by an atomic declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeValue {
    /// Value of `api`.
    Api(ApiMode),
    /// Value of `bulk_mode`.
    BulkMode(BulkMode),
    /// Value of `batch_size`.
    BatchSize(u32),
    /// Value of `anchor_date`.
    AnchorDate(String),
    /// Value of `load_after`.
    LoadAfter(String),
}

impl AttributeValue {
    /// Returns the key this value belongs to.
    #[must_use]
    pub const fn key(&self) -> AttributeKey {
        match self {
            Self::Api(_) => AttributeKey::Api,
            Self::BulkMode(_) => AttributeKey::BulkMode,
            Self::BatchSize(_) => AttributeKey::BatchSize,
            Self::AnchorDate(_) => AttributeKey::AnchorDate,
            Self::LoadAfter(_) => AttributeKey::LoadAfter,
        }
    }
}

/// A single object/key/value declaration extracted from a larger
/// [`SObjectDeclaration`].
#[derive(Clone, Debug, PartialEq)]
pub struct AtomicDeclaration {
    /// Object the fact is about.
    pub sf_object: String,
    /// Attribute the fact sets.
    pub key: AttributeKey,
    /// Declared value.
    pub value: AttributeValue,
    /// Priority weight of the declaring fragment.
    pub priority: u8,
    /// Rule deciding what happens when another atom targets the same slot.
    pub merge_rule: MergeRule,
}

/// Outcome of folding every atom for one (object, key) slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolvedValue {
    /// A single winning value.
    Single(AttributeValue),
    /// Every contributed value, in input order.
    Accumulated(Vec<AttributeValue>),
}

impl ResolvedValue {
    /// Consume the resolution and return its values in order.
    #[must_use]
    pub fn into_values(self) -> Vec<AttributeValue> {
        match self {
            Self::Single(value) => vec![value],
            Self::Accumulated(values) => values,
        }
    }
}

/// The current winner for one (object, key) slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedAttribute {
    /// Priority weight of the atom that won or seeded the slot.
    pub priority: u8,
    /// Resolved value.
    pub value: ResolvedValue,
}

impl ResolvedAttribute {
    /// Resolution holding a single winning value.
    #[must_use]
    pub const fn single(priority: u8, value: AttributeValue) -> Self {
        Self {
            priority,
            value: ResolvedValue::Single(value),
        }
    }

    /// Resolution holding an ordered list of values.
    #[must_use]
    pub const fn accumulated(priority: u8, values: Vec<AttributeValue>) -> Self {
        Self {
            priority,
            value: ResolvedValue::Accumulated(values),
        }
    }
}
