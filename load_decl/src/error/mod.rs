//! Error types produced while parsing, gathering and unifying declarations.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::{FragmentFailure, FragmentFailures};
pub use types::DeclError;
