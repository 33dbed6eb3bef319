//! Parsing of individual load declaration fragments.
//!
//! A fragment is one YAML document holding a list of sObject declarations
//! and at most one channel declaration group. Fragments are parsed
//! independently; combining them is the job of
//! [`gather_declarations`](crate::gather_declarations).

mod error;
mod source;
mod yaml;

use serde_json::Value;
use tracing::debug;

pub use source::FragmentSource;

use crate::result_ext::ValidationResultExt;
use crate::{ChannelDeclaration, ChannelDeclarationList, DeclError, DeclResult, SObjectDeclaration};

use error::structure_error;

/// Key identifying a channel declaration group among fragment items.
const CHANNEL_GROUP_KEY: &str = "user_channels";

/// The parsed contents of one declaration source.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    label: String,
    sobject_declarations: Vec<SObjectDeclaration>,
    channel_declarations: Vec<ChannelDeclaration>,
}

impl Fragment {
    /// Read and parse `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclError::File`] when a file source cannot be read, and
    /// any error reported by [`Fragment::parse_str`].
    pub fn load(source: &FragmentSource) -> DeclResult<Self> {
        let label = source.label();
        let contents = source.read()?;
        Self::parse_str(label, &contents)
    }

    /// Parse a YAML document labelled `name` in diagnostics.
    ///
    /// An empty document is an empty fragment.
    ///
    /// # Errors
    ///
    /// Returns [`DeclError::Yaml`] for malformed YAML,
    /// [`DeclError::Validation`] when the document does not match the
    /// declaration schema and [`DeclError::FragmentStructure`] when it holds
    /// more than one channel declaration group.
    ///
    /// # Examples
    ///
    /// ```
    /// use load_decl::Fragment;
    ///
    /// let fragment = Fragment::parse_str(
    ///     "inline",
    ///     "- sf_object: Account\n  api: bulk\n- user_channels:\n    - user: qa\n",
    /// )?;
    /// assert_eq!(fragment.sobject_declarations().len(), 1);
    /// assert_eq!(fragment.channel_declarations().len(), 1);
    /// # Ok::<_, std::sync::Arc<load_decl::DeclError>>(())
    /// ```
    pub fn parse_str(name: impl Into<String>, contents: &str) -> DeclResult<Self> {
        let label = name.into();
        let items = match yaml::parse_document(&label, contents)? {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            other => {
                return Err(DeclError::validation(
                    &label,
                    format!(
                        "expected a list of declarations, found {}",
                        value_kind(&other)
                    ),
                )
                .into());
            }
        };
        Self::from_items(label, items)
    }

    /// Sort raw fragment items into sObject declarations and the channel
    /// group.
    fn from_items(label: String, items: Vec<Value>) -> DeclResult<Self> {
        let mut sobject_declarations = Vec::new();
        let mut channel_groups = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            if is_channel_group(&item) {
                let group: ChannelDeclarationList =
                    serde_json::from_value(item).into_validation(&label, index + 1)?;
                channel_groups.push(group);
            } else {
                let decl: SObjectDeclaration =
                    serde_json::from_value(item).into_validation(&label, index + 1)?;
                sobject_declarations.push(decl);
            }
        }
        if channel_groups.len() > 1 {
            return Err(structure_error(&label, channel_groups.len()));
        }
        let channel_declarations = channel_groups
            .pop()
            .map(|group| group.user_channels)
            .unwrap_or_default();
        debug!(
            fragment = %label,
            declarations = sobject_declarations.len(),
            channels = channel_declarations.len(),
            "parsed load declaration fragment"
        );
        Ok(Self {
            label,
            sobject_declarations,
            channel_declarations,
        })
    }

    /// Returns the path or name the fragment was read from.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the sObject declarations in file order.
    #[must_use]
    pub fn sobject_declarations(&self) -> &[SObjectDeclaration] {
        &self.sobject_declarations
    }

    /// Returns the channels of the fragment's channel group, if any.
    #[must_use]
    pub fn channel_declarations(&self) -> &[ChannelDeclaration] {
        &self.channel_declarations
    }

    /// Decompose the fragment into its declarations and channels.
    #[must_use]
    pub fn into_parts(self) -> (Vec<SObjectDeclaration>, Vec<ChannelDeclaration>) {
        (self.sobject_declarations, self.channel_declarations)
    }
}

fn is_channel_group(item: &Value) -> bool {
    item.as_object()
        .is_some_and(|map| map.contains_key(CHANNEL_GROUP_KEY))
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests;
