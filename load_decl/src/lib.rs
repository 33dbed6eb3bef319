//! Unification of load declarations.
//!
//! Load declarations describe how each Salesforce object should be loaded:
//! which API to use, the batch size, the Bulk API concurrency mode, an anchor
//! date and which objects must be loaded first. Declarations for the same
//! object may come from several fragments; this crate collapses them into one
//! [`CanonicalDeclaration`] per object.
//!
//! Each declaration is split into atomic `(object, key, value)` facts carrying
//! the declaration's priority weight and the merge rule bound to the key. The
//! facts are then folded in order: overriding keys keep the value of the
//! strictly highest priority (ties favour the earlier fact), accumulating keys
//! collect every value.
//!
//! ```
//! use load_decl::{ApiMode, Priority, SObjectDeclaration, unify};
//!
//! let unified = unify(&[
//!     SObjectDeclaration::new("Account").with_api(ApiMode::Rest),
//!     SObjectDeclaration::new("Account")
//!         .with_priority(Priority::High)
//!         .with_api(ApiMode::Bulk)
//!         .with_load_after("User"),
//! ]);
//! let account = &unified["Account"];
//! assert_eq!(account.api, Some(ApiMode::Bulk));
//! assert_eq!(account.load_after, ["User"]);
//! ```

use std::sync::Arc;

mod atom;
mod declaration;
mod engine;
mod error;
mod export;
mod fragment;
mod gather;
mod keyword;
mod merge;
mod priority;
mod result_ext;

pub use atom::{AtomicDeclaration, AttributeKey, AttributeValue, ResolvedAttribute, ResolvedValue};
pub use declaration::{
    ApiMode, BulkMode, ChannelDeclaration, ChannelDeclarationList, SObjectDeclaration,
};
pub use engine::{
    CanonicalDeclaration, ResolvedDeclarations, UnificationEngine, UnifiedDeclarations, atomize,
    merge_atoms, unify,
};
pub use error::{DeclError, FragmentFailure, FragmentFailures};
pub use export::export_mapping;
pub use fragment::{Fragment, FragmentSource};
pub use gather::{
    GatheredDeclarations, LOAD_FILE_SUFFIX, gather_declarations, infer_load_file_path,
};
pub use keyword::UnknownKeyword;
pub use merge::{MergeFn, MergeRule, MergeRules};
pub use priority::{Priority, PriorityWeights};

/// Result type used throughout the crate.
///
/// Errors are shared so aggregated reports can hold them without cloning.
pub type DeclResult<T> = Result<T, Arc<DeclError>>;
