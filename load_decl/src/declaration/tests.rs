//! Schema tests for declaration deserialisation.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;

use super::{ApiMode, BulkMode, ChannelDeclarationList, SObjectDeclaration};
use crate::Priority;

#[rstest]
fn keywords_are_case_insensitive() -> Result<()> {
    let decl: SObjectDeclaration = serde_json::from_value(json!({
        "sf_object": "Account",
        "priority": "HIGH",
        "api": "Bulk",
        "bulk_mode": "PARALLEL",
    }))?;
    ensure!(decl.priority == Some(Priority::High), "priority {:?}", decl.priority);
    ensure!(decl.api == Some(ApiMode::Bulk), "api {:?}", decl.api);
    ensure!(
        decl.bulk_mode == Some(BulkMode::Parallel),
        "bulk_mode {:?}",
        decl.bulk_mode
    );
    Ok(())
}

#[rstest]
#[case::unknown_field(json!({"sf_object": "Account", "colour": "red"}), "unknown field")]
#[case::bad_api(json!({"sf_object": "Account", "api": "soap"}), "unknown api 'soap'")]
#[case::negative_batch(json!({"sf_object": "Account", "batch_size": -5}), "invalid value")]
#[case::missing_object(json!({"api": "rest"}), "missing field `sf_object`")]
fn schema_violations_are_rejected(
    #[case] input: serde_json::Value,
    #[case] expected: &str,
) -> Result<()> {
    let err = serde_json::from_value::<SObjectDeclaration>(input)
        .expect_err("declaration should be rejected");
    ensure!(
        err.to_string().contains(expected),
        "expected '{expected}' in: {err}"
    );
    Ok(())
}

#[rstest]
fn serialises_keywords_in_lower_case() -> Result<()> {
    let decl = SObjectDeclaration::new("Account")
        .with_api(ApiMode::Rest)
        .with_bulk_mode(BulkMode::Serial);
    let value = serde_json::to_value(&decl)?;
    ensure!(
        value == json!({"sf_object": "Account", "api": "rest", "bulk_mode": "serial"}),
        "unexpected serialisation {value}"
    );
    Ok(())
}

#[rstest]
#[case::zero_generators(json!({"user_channels": [{"user": "a", "num_generators": 0}]}))]
#[case::unknown_key(json!({"user_channels": [{"user": "a", "shards": 2}]}))]
#[case::missing_user(json!({"user_channels": [{"num_loaders": 2}]}))]
fn channel_schema_violations_are_rejected(#[case] input: serde_json::Value) {
    assert!(serde_json::from_value::<ChannelDeclarationList>(input).is_err());
}

#[rstest]
fn channel_recipe_options_accept_arbitrary_values() -> Result<()> {
    let list: ChannelDeclarationList = serde_json::from_value(json!({
        "user_channels": [
            {"user": "qa", "recipe_options": {"org_name": "qa", "scale": 3}, "num_loaders": 2}
        ]
    }))?;
    let channel = list.user_channels.first().ok_or_else(|| anyhow::anyhow!("no channel"))?;
    ensure!(channel.user == "qa", "user {}", channel.user);
    ensure!(
        channel.num_loaders.map(std::num::NonZeroU32::get) == Some(2),
        "num_loaders {:?}",
        channel.num_loaders
    );
    ensure!(
        channel
            .recipe_options
            .as_ref()
            .and_then(|opts| opts.get("scale"))
            == Some(&json!(3)),
        "recipe options {:?}",
        channel.recipe_options
    );
    Ok(())
}
