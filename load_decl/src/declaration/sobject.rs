//! Per-sObject load declarations and their keyword attributes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Priority;
use crate::keyword::{UnknownKeyword, normalise};

/// API used to load records of an sObject.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ApiMode {
    /// Let the loader choose between REST and Bulk.
    Smart,
    /// Always use the REST API.
    Rest,
    /// Always use the Bulk API.
    Bulk,
}

impl ApiMode {
    /// Returns the keyword used in declaration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "smart",
            Self::Rest => "rest",
            Self::Bulk => "bulk",
        }
    }
}

impl FromStr for ApiMode {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "smart" => Ok(Self::Smart),
            "rest" => Ok(Self::Rest),
            "bulk" => Ok(Self::Bulk),
            _ => Err(UnknownKeyword::new("api", s, "smart, rest, bulk")),
        }
    }
}

impl TryFrom<String> for ApiMode {
    type Error = UnknownKeyword;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Concurrency mode for Bulk API jobs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BulkMode {
    /// Batches run one after another.
    Serial,
    /// Batches run concurrently.
    Parallel,
}

impl BulkMode {
    /// Returns the keyword used in declaration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl FromStr for BulkMode {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "serial" => Ok(Self::Serial),
            "parallel" => Ok(Self::Parallel),
            _ => Err(UnknownKeyword::new("bulk_mode", s, "serial, parallel")),
        }
    }
}

impl TryFrom<String> for BulkMode {
    type Error = UnknownKeyword;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One fragment's statement about how a single sObject should be loaded.
///
/// Every attribute is optional. An absent attribute says nothing and never
/// clears a value declared elsewhere.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SObjectDeclaration {
    /// Name of the sObject this declaration applies to.
    pub sf_object: String,
    /// Priority tier used when declarations disagree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// API used to load the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiMode>,
    /// Number of records per batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    /// Bulk API concurrency mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_mode: Option<BulkMode>,
    /// Date that relative dates in generated records are anchored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_date: Option<String>,
    /// Another sObject that must be loaded before this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_after: Option<String>,
}

impl SObjectDeclaration {
    /// Start an empty declaration for `sf_object`.
    #[must_use]
    pub fn new(sf_object: impl Into<String>) -> Self {
        Self {
            sf_object: sf_object.into(),
            ..Self::default()
        }
    }

    /// Set the priority tier.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the API mode.
    #[must_use]
    pub fn with_api(mut self, api: ApiMode) -> Self {
        self.api = Some(api);
        self
    }

    /// Set the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the Bulk API concurrency mode.
    #[must_use]
    pub fn with_bulk_mode(mut self, bulk_mode: BulkMode) -> Self {
        self.bulk_mode = Some(bulk_mode);
        self
    }

    /// Set the anchor date.
    #[must_use]
    pub fn with_anchor_date(mut self, anchor_date: impl Into<String>) -> Self {
        self.anchor_date = Some(anchor_date.into());
        self
    }

    /// Require `sf_object` to be loaded first.
    #[must_use]
    pub fn with_load_after(mut self, sf_object: impl Into<String>) -> Self {
        self.load_after = Some(sf_object.into());
        self
    }
}
