//! End-to-end unification of declaration files on disk.

use anyhow::{Result, anyhow, ensure};
use load_decl::{
    ApiMode, DeclError, FragmentSource, GatheredDeclarations, Priority, PriorityWeights,
    UnificationEngine, export_mapping, gather_declarations,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use test_helpers::fragments::FragmentDir;

#[fixture]
fn fragment_dir() -> FragmentDir {
    FragmentDir::new().expect("create fragment directory")
}

fn gather_files(dir: &FragmentDir, files: &[(&str, &str)]) -> Result<GatheredDeclarations> {
    let sources = files
        .iter()
        .map(|(name, contents)| dir.write(name, contents).map(FragmentSource::File))
        .collect::<Result<Vec<_>>>()?;
    gather_declarations(None, &sources).map_err(|err| anyhow!(err.to_string()))
}

#[rstest]
fn high_priority_batch_size_overrides_low(fragment_dir: FragmentDir) -> Result<()> {
    let gathered = gather_files(
        &fragment_dir,
        &[
            ("base.load.yml", "- sf_object: Account\n  priority: low\n  batch_size: 200\n"),
            ("tuned.load.yml", "- sf_object: Account\n  priority: high\n  batch_size: 50\n"),
        ],
    )?;
    let batch_size = gathered.declarations["Account"].batch_size;
    ensure!(batch_size == Some(50), "batch size {batch_size:?}");
    Ok(())
}

#[rstest]
fn medium_tie_favours_first_file(fragment_dir: FragmentDir) -> Result<()> {
    let gathered = gather_files(
        &fragment_dir,
        &[
            ("a.load.yml", "- sf_object: Account\n  priority: medium\n  api: rest\n"),
            ("b.load.yml", "- sf_object: Account\n  priority: medium\n  api: bulk\n"),
        ],
    )?;
    let api = gathered.declarations["Account"].api;
    ensure!(api == Some(ApiMode::Rest), "api {api:?}");
    Ok(())
}

#[rstest]
fn load_after_collects_across_files(fragment_dir: FragmentDir) -> Result<()> {
    let gathered = gather_files(
        &fragment_dir,
        &[
            ("a.load.yml", "- sf_object: Contact\n  load_after: Account\n"),
            ("b.load.yml", "- sf_object: Contact\n  load_after: User\n"),
        ],
    )?;
    let load_after = &gathered.declarations["Contact"].load_after;
    ensure!(load_after == &["Account", "User"], "load_after {load_after:?}");
    Ok(())
}

#[rstest]
fn two_channel_groups_abort_gathering(fragment_dir: FragmentDir) -> Result<()> {
    let good = fragment_dir.write("good.load.yml", "- sf_object: Account\n  api: bulk\n")?;
    let bad = fragment_dir.write(
        "bad.load.yml",
        concat!(
            "- user_channels:\n",
            "    - user: one@example.com\n",
            "- user_channels:\n",
            "    - user: two@example.com\n",
        ),
    )?;
    let outcome =
        gather_declarations(None, &[FragmentSource::File(good), FragmentSource::File(bad)]);
    let Err(err) = outcome else {
        return Err(anyhow!("expected a fragment structure error"));
    };
    ensure!(
        matches!(&*err, DeclError::FragmentStructure { count: 2, .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn exported_mapping_omits_unset_settings(fragment_dir: FragmentDir) -> Result<()> {
    let gathered = gather_files(
        &fragment_dir,
        &[(
            "all.load.yml",
            concat!(
                "- sf_object: Account\n",
                "  api: BULK\n",
                "  bulk_mode: Serial\n",
                "  batch_size: 500\n",
                "  anchor_date: 2021-01-01\n",
                "- sf_object: Contact\n",
                "  load_after: Account\n",
                "- sf_object: Opportunity\n",
                "  priority: HIGH\n",
            ),
        )],
    )?;
    let exported = Value::Object(export_mapping(&gathered.declarations));
    let expected = json!({
        "Account": {
            "api": "bulk",
            "bulk_mode": "serial",
            "batch_size": 500,
            "anchor_date": "2021-01-01",
        },
        "Contact": {},
        "Opportunity": {},
    });
    ensure!(exported == expected, "unexpected export {exported}");
    let mapping = gathered.declarations["Account"].as_mapping();
    let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
    ensure!(
        keys == ["api", "bulk_mode", "batch_size", "anchor_date"],
        "unexpected key order {keys:?}"
    );
    Ok(())
}

#[rstest]
fn custom_weights_change_the_winner() -> Result<()> {
    // Low outranks high under this table.
    let engine = UnificationEngine::default().with_weights(PriorityWeights {
        low: 9,
        medium: 5,
        high: 1,
    });
    let gathered = engine
        .gather(
            None,
            &[
                FragmentSource::inline(
                    "high",
                    "- sf_object: Account\n  priority: high\n  api: rest\n",
                ),
                FragmentSource::inline(
                    "low",
                    "- sf_object: Account\n  priority: low\n  api: smart\n",
                ),
            ],
        )
        .map_err(|err| anyhow!(err.to_string()))?;
    let account = &gathered.declarations["Account"];
    ensure!(account.api == Some(ApiMode::Smart), "api {:?}", account.api);
    ensure!(
        engine.weights().weight(Priority::Low) == 9,
        "weights were not applied"
    );
    Ok(())
}
