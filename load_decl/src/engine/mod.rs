//! The unification engine: atomize declarations, fold atoms, assemble one
//! canonical declaration per object.
//!
//! Processing is strictly sequential. Ties between equal priorities and the
//! order of accumulated values both follow the order declarations are
//! supplied in, so callers must pass fragments in a reproducible order.

mod canonical;

use std::collections::BTreeMap;

use tracing::{debug, trace};

pub use canonical::CanonicalDeclaration;

use crate::{
    AtomicDeclaration, AttributeKey, MergeRules, PriorityWeights, ResolvedAttribute,
    SObjectDeclaration,
};

/// Resolved slots grouped by object then attribute key.
pub type ResolvedDeclarations = BTreeMap<String, BTreeMap<AttributeKey, ResolvedAttribute>>;

/// Unified declarations keyed by object name.
pub type UnifiedDeclarations = BTreeMap<String, CanonicalDeclaration>;

/// Engine configuration: the priority weight table and the merge-rule
/// registry.
///
/// # Examples
///
/// ```
/// use load_decl::{ApiMode, Priority, SObjectDeclaration, UnificationEngine};
///
/// let engine = UnificationEngine::default();
/// let unified = engine.unify(&[
///     SObjectDeclaration::new("Account").with_api(ApiMode::Rest),
///     SObjectDeclaration::new("Account")
///         .with_priority(Priority::High)
///         .with_api(ApiMode::Bulk),
/// ]);
/// assert_eq!(unified["Account"].api, Some(ApiMode::Bulk));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnificationEngine {
    weights: PriorityWeights,
    rules: MergeRules,
}

impl UnificationEngine {
    /// Build an engine from explicit weights and rules.
    #[must_use]
    pub const fn new(weights: PriorityWeights, rules: MergeRules) -> Self {
        Self { weights, rules }
    }

    /// Replace the priority weight table.
    #[must_use]
    pub fn with_weights(mut self, weights: PriorityWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Returns the priority weight table.
    #[must_use]
    pub const fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    /// Returns the merge-rule registry.
    #[must_use]
    pub const fn rules(&self) -> &MergeRules {
        &self.rules
    }

    /// Expand declarations into atomic declarations.
    ///
    /// All atoms of declaration *i* precede those of declaration *i + 1*;
    /// within a declaration atoms follow the registry order. Absent
    /// attributes yield no atom.
    #[must_use]
    pub fn atomize(&self, declarations: &[SObjectDeclaration]) -> Vec<AtomicDeclaration> {
        declarations
            .iter()
            .flat_map(|decl| {
                let priority = self.weights.weight_or_default(decl.priority);
                self.rules.iter().filter_map(move |(key, merge_rule)| {
                    key.extract(decl).map(|value| AtomicDeclaration {
                        sf_object: decl.sf_object.clone(),
                        key,
                        value,
                        priority,
                        merge_rule,
                    })
                })
            })
            .collect()
    }

    /// Fold atoms into resolved slots; see [`merge_atoms`].
    #[must_use]
    pub fn merge<I>(&self, atoms: I) -> ResolvedDeclarations
    where
        I: IntoIterator<Item = AtomicDeclaration>,
    {
        merge_atoms(atoms)
    }

    /// Collapse declarations into one canonical declaration per object.
    ///
    /// Every object named by at least one declaration appears in the result,
    /// even when it contributes no attributes. Objects never mentioned never
    /// appear.
    #[must_use]
    pub fn unify(&self, declarations: &[SObjectDeclaration]) -> UnifiedDeclarations {
        let atoms = self.atomize(declarations);
        let atom_count = atoms.len();
        let mut unified: UnifiedDeclarations = declarations
            .iter()
            .map(|decl| {
                (
                    decl.sf_object.clone(),
                    CanonicalDeclaration::new(decl.sf_object.clone()),
                )
            })
            .collect();
        for (sf_object, slots) in merge_atoms(atoms) {
            let canonical = unified
                .entry(sf_object)
                .or_insert_with_key(|name| CanonicalDeclaration::new(name.clone()));
            for attribute in slots.into_values() {
                canonical.apply(attribute.value);
            }
        }
        debug!(
            declarations = declarations.len(),
            atoms = atom_count,
            objects = unified.len(),
            "unified load declarations"
        );
        unified
    }
}

/// Fold atoms, in order, into one resolution per (object, key) slot.
///
/// Each atom's own merge rule decides how it combines with the slot's current
/// winner.
pub fn merge_atoms<I>(atoms: I) -> ResolvedDeclarations
where
    I: IntoIterator<Item = AtomicDeclaration>,
{
    let mut resolved = ResolvedDeclarations::new();
    for atom in atoms {
        trace!(
            sf_object = %atom.sf_object,
            key = atom.key.as_str(),
            priority = atom.priority,
            rule = atom.merge_rule.name(),
            "merging atomic declaration"
        );
        let key = atom.key;
        let slots = resolved.entry(atom.sf_object.clone()).or_default();
        let existing = slots.remove(&key);
        let merge_rule = atom.merge_rule;
        slots.insert(key, merge_rule.apply(atom, existing));
    }
    resolved
}

/// Expand declarations using the standard weights and rules.
#[must_use]
pub fn atomize(declarations: &[SObjectDeclaration]) -> Vec<AtomicDeclaration> {
    UnificationEngine::default().atomize(declarations)
}

/// Unify declarations using the standard weights and rules.
///
/// # Examples
///
/// ```
/// use load_decl::{SObjectDeclaration, unify};
///
/// let unified = unify(&[
///     SObjectDeclaration::new("Contact").with_load_after("Account"),
///     SObjectDeclaration::new("Contact").with_load_after("User"),
/// ]);
/// assert_eq!(unified["Contact"].load_after, ["Account", "User"]);
/// ```
#[must_use]
pub fn unify(declarations: &[SObjectDeclaration]) -> UnifiedDeclarations {
    UnificationEngine::default().unify(declarations)
}
