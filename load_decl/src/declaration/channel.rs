//! Channel declarations: per-user loader channels.
//!
//! Channels are collected alongside sObject declarations but never take part
//! in priority or accumulation merging.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A loader channel owned by one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelDeclaration {
    /// User that owns the channel.
    pub user: String,
    /// Recipe options overridden for this channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_options: Option<BTreeMap<String, serde_json::Value>>,
    /// Number of generator processes to run for this channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_generators: Option<NonZeroU32>,
    /// Number of loader processes to run for this channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_loaders: Option<NonZeroU32>,
}

/// The single channel group a fragment may contain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelDeclarationList {
    /// Channels declared by the group, in file order.
    pub user_channels: Vec<ChannelDeclaration>,
}
