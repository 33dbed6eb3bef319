//! Fragment parsing coverage.
//! Ensures YAML fragments are sorted into declarations and channel groups and
//! that malformed fragments are reported against their label.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::{Fragment, FragmentSource};
use crate::{ApiMode, DeclError, Priority};

fn parse(contents: &str) -> Result<Fragment> {
    Fragment::parse_str("fragment.load.yml", contents)
        .map_err(|err| anyhow!(err.to_string()))
}

#[rstest]
fn parses_declarations_in_file_order() -> Result<()> {
    let fragment = parse(concat!(
        "- sf_object: Account\n",
        "  priority: High\n",
        "  api: REST\n",
        "  batch_size: 200\n",
        "  anchor_date: 2021-06-01\n",
        "- sf_object: Contact\n",
        "  load_after: Account\n",
    ))?;
    let decls = fragment.sobject_declarations();
    ensure!(decls.len() == 2, "expected two declarations, got {}", decls.len());
    let account = decls.first().ok_or_else(|| anyhow!("missing Account"))?;
    ensure!(account.sf_object == "Account", "first object {}", account.sf_object);
    ensure!(account.priority == Some(Priority::High), "priority {:?}", account.priority);
    ensure!(account.api == Some(ApiMode::Rest), "api {:?}", account.api);
    ensure!(account.batch_size == Some(200), "batch size {:?}", account.batch_size);
    ensure!(
        account.anchor_date.as_deref() == Some("2021-06-01"),
        "anchor date {:?}",
        account.anchor_date
    );
    ensure!(fragment.channel_declarations().is_empty(), "unexpected channels");
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::blank("  \n\n")]
fn empty_documents_are_empty_fragments(#[case] contents: &str) -> Result<()> {
    let fragment = parse(contents)?;
    ensure!(fragment.sobject_declarations().is_empty(), "expected no declarations");
    ensure!(fragment.channel_declarations().is_empty(), "expected no channels");
    Ok(())
}

#[rstest]
fn single_channel_group_is_collected() -> Result<()> {
    let fragment = parse(concat!(
        "- user_channels:\n",
        "    - user: first@example.com\n",
        "      num_generators: 2\n",
        "    - user: second@example.com\n",
        "      recipe_options:\n",
        "        org: scratch\n",
        "- sf_object: Account\n",
    ))?;
    let users: Vec<&str> = fragment
        .channel_declarations()
        .iter()
        .map(|channel| channel.user.as_str())
        .collect();
    ensure!(
        users == ["first@example.com", "second@example.com"],
        "unexpected users {users:?}"
    );
    ensure!(fragment.sobject_declarations().len() == 1, "expected one declaration");
    Ok(())
}

#[rstest]
fn two_channel_groups_are_a_structure_error() {
    let err = Fragment::parse_str(
        "channels.load.yml",
        concat!(
            "- user_channels:\n",
            "    - user: a\n",
            "- sf_object: Account\n",
            "- user_channels:\n",
            "    - user: b\n",
        ),
    )
    .expect_err("two channel groups must be rejected");
    assert!(
        matches!(
            &*err,
            DeclError::FragmentStructure { fragment, count: 2 } if fragment == "channels.load.yml"
        ),
        "unexpected error {err:?}"
    );
}

#[rstest]
#[case::unknown_field(
    "- sf_object: Account\n  colour: red\n",
    "item 1: unknown field `colour`"
)]
#[case::second_item(
    "- sf_object: Account\n- sf_object: Contact\n  api: soap\n",
    "item 2: unknown api 'soap'"
)]
#[case::top_level_mapping(
    "sf_object: Account\n",
    "expected a list of declarations, found a mapping"
)]
#[case::bad_channel("- user_channels:\n    - owner: a\n", "item 1:")]
fn schema_violations_name_the_fragment(#[case] contents: &str, #[case] expected: &str) {
    let err = Fragment::parse_str("bad.load.yml", contents)
        .expect_err("fragment must be rejected");
    let message = err.to_string();
    assert!(matches!(&*err, DeclError::Validation { .. }), "unexpected error {err:?}");
    assert!(message.contains("'bad.load.yml'"), "label missing from: {message}");
    assert!(message.contains(expected), "expected '{expected}' in: {message}");
}

#[rstest]
fn channel_groups_reject_extra_keys() {
    let err = Fragment::parse_str(
        "mixed.load.yml",
        "- sf_object: Account\n  user_channels:\n    - user: a\n",
    )
    .expect_err("a channel group with extra keys must be rejected");
    let message = err.to_string();
    assert!(matches!(&*err, DeclError::Validation { .. }), "unexpected error {err:?}");
    assert!(
        message.contains("item 1: unknown field `sf_object`"),
        "unexpected message: {message}"
    );
}

#[rstest]
fn malformed_yaml_is_a_yaml_error() {
    let err = Fragment::parse_str("broken.load.yml", "- sf_object: [")
        .expect_err("must fail");
    assert!(matches!(&*err, DeclError::Yaml { .. }), "unexpected error {err:?}");
}

#[rstest]
fn yes_stays_a_string() -> Result<()> {
    let fragment = parse("- sf_object: Account\n  anchor_date: yes\n")?;
    let anchor = fragment
        .sobject_declarations()
        .first()
        .and_then(|decl| decl.anchor_date.clone());
    ensure!(anchor.as_deref() == Some("yes"), "anchor date {anchor:?}");
    Ok(())
}

#[rstest]
fn inline_sources_keep_their_name() -> Result<()> {
    let source = FragmentSource::inline("inline-defaults", "- sf_object: Account\n");
    let fragment = Fragment::load(&source).map_err(|err| anyhow!(err.to_string()))?;
    ensure!(fragment.label() == "inline-defaults", "label {}", fragment.label());
    Ok(())
}

#[rstest]
fn loads_files_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("disk.load.yml"))
        .map_err(|path| anyhow!("non UTF-8 temp path {}", path.display()))?;
    std::fs::write(&path, "- sf_object: Account\n  api: bulk\n")?;
    let fragment = Fragment::load(&FragmentSource::file(path.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(fragment.label() == path.as_str(), "label {}", fragment.label());
    let (decls, channels) = fragment.into_parts();
    ensure!(decls.len() == 1 && channels.is_empty(), "unexpected contents");
    Ok(())
}

#[rstest]
fn missing_files_are_file_errors() {
    let err = Fragment::load(&FragmentSource::file("does/not/exist.load.yml"))
        .expect_err("missing file must fail");
    assert!(
        matches!(&*err, DeclError::File { path, .. } if path.as_str() == "does/not/exist.load.yml"),
        "unexpected error {err:?}"
    );
}
