//! Priority tiers and the weight table used to order them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keyword::{UnknownKeyword, normalise};

/// Priority tier of a declaration.
///
/// Declarations omitting a priority are treated as [`Priority::Medium`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Priority {
    /// Yields to every other tier.
    Low,
    /// The default tier.
    #[default]
    Medium,
    /// Overrides every other tier.
    High,
}

impl Priority {
    /// Returns the keyword used for this tier in declaration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnknownKeyword::new("priority", s, "low, medium, high")),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = UnknownKeyword;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Numeric weights assigned to each [`Priority`] tier.
///
/// The merge rules only ever compare weights, so swapping the table changes
/// which tier wins without touching the rules themselves.
///
/// # Examples
///
/// ```
/// use load_decl::{Priority, PriorityWeights};
///
/// let weights = PriorityWeights::default();
/// assert_eq!(weights.weight(Priority::Low), 1);
/// assert_eq!(weights.weight_or_default(None), 2);
/// assert_eq!(weights.weight(Priority::High), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityWeights {
    /// Weight of [`Priority::Low`].
    pub low: u8,
    /// Weight of [`Priority::Medium`].
    pub medium: u8,
    /// Weight of [`Priority::High`].
    pub high: u8,
}

impl PriorityWeights {
    /// Returns the weight assigned to `priority`.
    #[must_use]
    pub const fn weight(&self, priority: Priority) -> u8 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    /// Returns the weight for an optional priority, falling back to
    /// [`Priority::Medium`].
    #[must_use]
    pub fn weight_or_default(&self, priority: Option<Priority>) -> u8 {
        self.weight(priority.unwrap_or_default())
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            low: 1,
            medium: 2,
            high: 3,
        }
    }
}
