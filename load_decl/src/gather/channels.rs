//! Concatenation of channel declarations across fragments.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{ChannelDeclaration, DeclError, DeclResult};

/// Appends channels in fragment order, rejecting a user that owns more than
/// one channel.
#[derive(Debug, Default)]
pub(super) struct ChannelCollector {
    users: BTreeSet<String>,
    channels: Vec<ChannelDeclaration>,
}

impl ChannelCollector {
    /// Append the channels declared by `fragment`.
    pub(super) fn extend(
        &mut self,
        fragment: &str,
        channels: Vec<ChannelDeclaration>,
    ) -> DeclResult<()> {
        for channel in channels {
            if !self.users.insert(channel.user.clone()) {
                return Err(Arc::new(DeclError::DuplicateChannelUser {
                    user: channel.user,
                    fragment: fragment.to_owned(),
                }));
            }
            self.channels.push(channel);
        }
        Ok(())
    }

    pub(super) fn finish(self) -> Vec<ChannelDeclaration> {
        self.channels
    }
}
