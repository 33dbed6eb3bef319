//! Test helpers shared across the workspace crates.
//!
//! [`fragments`] writes declaration fragments into throwaway directories and
//! [`figment`] wraps `figment::Jail` for settings tests.

pub mod figment;
pub mod fragments;
