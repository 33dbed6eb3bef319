//! Running `load-decl` against declaration files on disk.

use anyhow::{Result, anyhow, ensure};
use load_decl::PriorityWeights;
use load_decl_cli::error::LoadDeclCliError;
use load_decl_cli::run;
use load_decl_cli::settings::Settings;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use test_helpers::fragments::FragmentDir;

#[fixture]
fn fragment_dir() -> FragmentDir {
    FragmentDir::new().expect("create fragment directory")
}

fn run_json(settings: &Settings) -> Result<Value> {
    let rendered = run(settings).map_err(|err| anyhow!(err.to_string()))?;
    Ok(serde_json::from_str(&rendered)?)
}

#[rstest]
fn unifies_files_in_order(fragment_dir: FragmentDir) -> Result<()> {
    let base = fragment_dir.write(
        "base.load.yml",
        concat!(
            "- sf_object: Account\n",
            "  api: rest\n",
            "  batch_size: 200\n",
            "- sf_object: Contact\n",
            "  load_after: Account\n",
        ),
    )?;
    let tuned = fragment_dir.write(
        "tuned.load.yml",
        concat!(
            "- sf_object: Account\n",
            "  priority: high\n",
            "  batch_size: 50\n",
            "- sf_object: Contact\n",
            "  load_after: User\n",
        ),
    )?;
    let value = run_json(&Settings {
        load_declarations: vec![base, tuned],
        ..Settings::default()
    })?;
    let expected = json!({
        "Account": {"api": "rest", "batch_size": 50},
        "Contact": {},
    });
    ensure!(value == expected, "unexpected output {value}");
    Ok(())
}

#[rstest]
fn infers_declarations_from_recipe(fragment_dir: FragmentDir) -> Result<()> {
    let recipe = fragment_dir.write("demo.recipe.yml", "- object: Account\n")?;
    fragment_dir.write(
        "demo.load.yml",
        "- sf_object: Account\n  bulk_mode: parallel\n- user_channels:\n    - user: demo\n",
    )?;
    let value = run_json(&Settings {
        recipe: Some(recipe),
        include_channels: true,
        ..Settings::default()
    })?;
    let expected = json!({
        "declarations": {"Account": {"bulk_mode": "parallel"}},
        "channels": [{"user": "demo"}],
    });
    ensure!(value == expected, "unexpected output {value}");
    Ok(())
}

#[rstest]
fn weights_from_settings_reach_the_engine(fragment_dir: FragmentDir) -> Result<()> {
    let fragment = fragment_dir.write(
        "weights.load.yml",
        "- sf_object: Account\n  priority: low\n  api: bulk\n- sf_object: Account\n  api: rest\n",
    )?;
    let value = run_json(&Settings {
        load_declarations: vec![fragment],
        weights: PriorityWeights {
            low: 3,
            medium: 2,
            high: 1,
        },
        ..Settings::default()
    })?;
    ensure!(value == json!({"Account": {"api": "bulk"}}), "unexpected output {value}");
    Ok(())
}

#[rstest]
fn invalid_files_surface_declaration_errors(fragment_dir: FragmentDir) -> Result<()> {
    let fragment =
        fragment_dir.write("bad.load.yml", "- sf_object: Account\n  api: soap\n")?;
    let err = run(&Settings {
        load_declarations: vec![fragment],
        ..Settings::default()
    })
    .err();
    ensure!(
        matches!(&err, Some(LoadDeclCliError::Declarations(_))),
        "unexpected outcome {err:?}"
    );
    let message = err.map(|e| e.to_string()).unwrap_or_default();
    ensure!(message.contains("unknown api 'soap'"), "message: {message}");
    Ok(())
}
