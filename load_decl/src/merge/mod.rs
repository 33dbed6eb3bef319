//! Merge rules and the key → rule registry.
//!
//! Merge rules say what to do when two atomic declarations target the same
//! object and key. Each rule is a named pure function of the incoming atom
//! and the slot's current resolution, so new attributes or strategies can be
//! registered without touching the merge loop.

mod registry;
mod rule;

pub use registry::MergeRules;
pub use rule::{MergeFn, MergeRule};
