/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary with a temporary data directory and a
/// zero fetch delay.
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::DataDirBuilder;
use predicates::prelude::*;

fn story_search_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_story-search"));
    cmd.env_remove("STORY_SEARCH_FAIL")
        .env_remove("STORY_SEARCH_DELAY_MS")
        .env("STORY_SEARCH_DATA_DIR", data_dir)
        .args(["--delay-ms", "0"]);
    cmd
}

#[test]
fn test_cli_list_default_term() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[0] React (https://reactjs.org/) by Jordan Walke | 3 comments | 4 points",
        ))
        .stdout(predicate::str::contains("[1] Redux (https://redux.js.org/)"));
}

#[test]
fn test_cli_list_with_term_filters_and_persists() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .args(["list", "--term", "Red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Redux"))
        .stdout(predicate::str::contains("React").not());

    assert_eq!(common::stored_term(data_dir.path()).as_deref(), Some("Red"));

    // Next run remembers the term
    story_search_cmd(data_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("React").not());
}

#[test]
fn test_cli_list_remove() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .args(["list", "--term", "", "--remove", "0", "--remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Redux"))
        .stdout(predicate::str::contains("React").not());
}

#[test]
fn test_cli_list_no_match() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .args(["list", "--term", "vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stories match \"vue\""));
}

#[test]
fn test_cli_list_fetch_failure() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .args(["list", "--fail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Something went wrong ..."));
}

#[test]
fn test_cli_fail_from_environment() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .env("STORY_SEARCH_FAIL", "true")
        .arg("list")
        .assert()
        .failure();
}

#[test]
fn test_cli_fail_from_environment_accepts_numbers() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .env("STORY_SEARCH_FAIL", "1")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Something went wrong ..."));

    story_search_cmd(data_dir.path())
        .env("STORY_SEARCH_FAIL", "0")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] React"));
}

#[test]
fn test_cli_list_with_unreadable_storage_uses_default_term() {
    let data_dir = DataDirBuilder::new();
    std::fs::create_dir(data_dir.path().join("storage.json")).unwrap();

    story_search_cmd(data_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] React"))
        .stdout(predicate::str::contains("[1] Redux"));

    story_search_cmd(data_dir.path())
        .arg("term")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search term: \"R\""));
}

#[test]
fn test_cli_term_show_set_reset() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .arg("term")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search term: \"R\""))
        .stdout(predicate::str::contains("storage.json"));

    story_search_cmd(data_dir.path())
        .args(["term", "set", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search term set to \"abc\""));

    story_search_cmd(data_dir.path())
        .arg("term")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search term: \"abc\""));

    story_search_cmd(data_dir.path())
        .args(["term", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search term reset to \"R\""));

    assert_eq!(common::stored_term(data_dir.path()), None);
}

#[test]
fn test_cli_ephemeral_does_not_write() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .args(["--ephemeral", "term", "set", "abc"])
        .assert()
        .success();

    assert!(!data_dir.path().join("storage.json").exists());
}

#[test]
fn test_cli_sanitizes_echoed_term() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .args(["list", "--term", "\x1b[31mzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stories match \"zzz\""))
        .stdout(predicate::str::contains("\x1b[31m").not());
}

#[test]
fn test_cli_help_flag() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search and prune a list of stories"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("term"));
}

#[test]
fn test_cli_version_flag() {
    let data_dir = DataDirBuilder::new();

    story_search_cmd(data_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
