//! Built-in merge strategies.

use std::fmt;

use crate::{AtomicDeclaration, ResolvedAttribute, ResolvedValue};

/// Signature shared by every merge strategy.
///
/// The strategy receives the incoming atom and takes ownership of the slot's
/// previous resolution (if any), returning the slot's new resolution.
pub type MergeFn = fn(AtomicDeclaration, Option<ResolvedAttribute>) -> ResolvedAttribute;

/// A named merge strategy.
#[derive(Clone, Copy)]
pub struct MergeRule {
    name: &'static str,
    apply: MergeFn,
}

impl MergeRule {
    /// The strictly higher priority wins; on a tie the earlier atom is kept.
    pub const HIGHEST_PRIORITY: Self = Self::new("use_highest_priority", use_highest_priority);

    /// Every value is kept, appended in input order.
    pub const APPEND: Self = Self::new("append", append);

    /// Build a rule from a name and a strategy function.
    ///
    /// # Examples
    ///
    /// ```
    /// use load_decl::{AtomicDeclaration, MergeRule, ResolvedAttribute};
    ///
    /// fn latest_wins(
    ///     incoming: AtomicDeclaration,
    ///     _existing: Option<ResolvedAttribute>,
    /// ) -> ResolvedAttribute {
    ///     ResolvedAttribute::single(incoming.priority, incoming.value)
    /// }
    ///
    /// let rule = MergeRule::new("latest_wins", latest_wins);
    /// assert_eq!(rule.name(), "latest_wins");
    /// ```
    #[must_use]
    pub const fn new(name: &'static str, apply: MergeFn) -> Self {
        Self { name, apply }
    }

    /// Returns the rule's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fold `incoming` into the slot's previous resolution.
    #[must_use]
    pub fn apply(
        &self,
        incoming: AtomicDeclaration,
        existing: Option<ResolvedAttribute>,
    ) -> ResolvedAttribute {
        (self.apply)(incoming, existing)
    }
}

impl fmt::Debug for MergeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MergeRule").field(&self.name).finish()
    }
}

/// Rules are equal when both the name and the strategy function match, so a
/// custom rule reusing a built-in name is still told apart.
impl PartialEq for MergeRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.apply, other.apply)
    }
}

impl Eq for MergeRule {}

/// Strictly higher priority replaces the slot; ties keep the existing value.
fn use_highest_priority(
    incoming: AtomicDeclaration,
    existing: Option<ResolvedAttribute>,
) -> ResolvedAttribute {
    match existing {
        Some(current) if current.priority >= incoming.priority => current,
        _ => ResolvedAttribute::single(incoming.priority, incoming.value),
    }
}

/// The first atom seeds a list and later atoms extend it. Repeated values are
/// kept.
fn append(incoming: AtomicDeclaration, existing: Option<ResolvedAttribute>) -> ResolvedAttribute {
    match existing {
        Some(ResolvedAttribute { priority, value }) => {
            let mut values = value.into_values();
            values.push(incoming.value);
            ResolvedAttribute {
                priority,
                value: ResolvedValue::Accumulated(values),
            }
        }
        None => ResolvedAttribute::accumulated(incoming.priority, vec![incoming.value]),
    }
}
