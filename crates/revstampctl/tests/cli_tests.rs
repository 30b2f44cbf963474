//! Tests for the CLI command layer over a real repository.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature, Time};
use revstampctl::commands;
use tempfile::TempDir;

fn repo_with_commit() -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    fs::write(dir.path().join("index.md"), "# hello\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("index.md")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = Signature::new(
        "tester",
        "tester@example.com",
        &Time::new(1_700_000_000, 0),
    )
    .unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();

    dir
}

#[test]
fn annotation_json_carries_buildsha_and_social() {
    let dir = repo_with_commit();

    let rendered = commands::annotation_json(dir.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let buildsha = value["globals"]["buildsha"]
        .as_str()
        .expect("buildsha must be a string");
    assert_eq!(buildsha.len(), 8);
    assert_eq!(value["extra"]["social"], serde_json::Value::Bool(true));
}

#[test]
fn annotation_json_respects_config_file() {
    let dir = repo_with_commit();
    fs::write(
        dir.path().join("revstamp.toml"),
        "display_timezone = \"+08:00\"\n",
    )
    .unwrap();

    let rendered = commands::annotation_json(dir.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let buildsha = value["globals"]["buildsha"].as_str().unwrap();
    assert!(
        buildsha.ends_with("+08:00"),
        "configured offset must show in the display string: {buildsha}"
    );
}

#[test]
fn check_fails_outside_a_working_tree() {
    let dir = TempDir::new().unwrap();
    assert!(commands::check(dir.path()).is_err());
}
