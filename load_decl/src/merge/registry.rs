//! Static binding of attribute keys to merge rules.

use crate::AttributeKey;

use super::MergeRule;

/// Registry binding each attribute key to exactly one merge rule.
///
/// The registry order is the order atoms are emitted for one declaration.
/// Keys without a binding are ignored by the atomizer.
///
/// # Examples
///
/// ```
/// use load_decl::{AttributeKey, MergeRule, MergeRules};
///
/// let rules = MergeRules::standard();
/// assert_eq!(rules.rule_for(AttributeKey::Api), Some(MergeRule::HIGHEST_PRIORITY));
/// assert_eq!(rules.rule_for(AttributeKey::LoadAfter), Some(MergeRule::APPEND));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MergeRules {
    bindings: Vec<(AttributeKey, MergeRule)>,
}

impl MergeRules {
    /// A registry with no bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Override-by-priority for every setting, accumulation for `load_after`.
    #[must_use]
    pub fn standard() -> Self {
        AttributeKey::ALL
            .into_iter()
            .fold(Self::empty(), |rules, key| {
                let rule = match key {
                    AttributeKey::LoadAfter => MergeRule::APPEND,
                    AttributeKey::Api
                    | AttributeKey::BulkMode
                    | AttributeKey::BatchSize
                    | AttributeKey::AnchorDate => MergeRule::HIGHEST_PRIORITY,
                };
                rules.bind(key, rule)
            })
    }

    /// Bind `key` to `rule`, replacing any earlier binding in place.
    #[must_use]
    pub fn bind(mut self, key: AttributeKey, rule: MergeRule) -> Self {
        match self.bindings.iter_mut().find(|(bound, _)| *bound == key) {
            Some(binding) => binding.1 = rule,
            None => self.bindings.push((key, rule)),
        }
        self
    }

    /// Returns the rule bound to `key`.
    #[must_use]
    pub fn rule_for(&self, key: AttributeKey) -> Option<MergeRule> {
        self.bindings
            .iter()
            .find_map(|(bound, rule)| (*bound == key).then_some(*rule))
    }

    /// Iterate over the bindings in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, MergeRule)> + '_ {
        self.bindings.iter().copied()
    }
}

impl Default for MergeRules {
    fn default() -> Self {
        Self::standard()
    }
}
