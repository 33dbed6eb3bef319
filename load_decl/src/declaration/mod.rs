//! Typed load declarations as they appear in declaration files.
//!
//! A fragment lists sObject declarations, each naming an object and any of
//! the attributes below, and optionally one group of channel declarations:
//!
//! ```yaml
//! - sf_object: Account
//!   priority: high
//!   api: bulk
//!   batch_size: 50
//! - sf_object: Contact
//!   load_after: Account
//! - user_channels:
//!     - user: sandbox-admin
//!       num_generators: 4
//! ```

mod channel;
mod sobject;

pub use channel::{ChannelDeclaration, ChannelDeclarationList};
pub use sobject::{ApiMode, BulkMode, SObjectDeclaration};

#[cfg(test)]
mod tests;
