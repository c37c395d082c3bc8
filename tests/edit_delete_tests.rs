//! Integration tests for show, edit and delete

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_entry, moodj_in};

fn load(temp: &TempDir) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(temp.path().join("entries.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_show_by_position() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "work");

    moodj_in(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Ok day"))
        .stdout(predicate::str::contains("Mood:  7/10"));
}

#[test]
fn test_edit_updates_only_given_fields() {
    let temp = TempDir::new().unwrap();
    moodj_in(temp.path())
        .args(["add", "--date", "2024-01-01", "--mood", "7", "--title", "Ok day"])
        .args(["--notes", "walked", "--tags", "work"])
        .assert()
        .success();
    let before = load(&temp)[0].clone();

    moodj_in(temp.path())
        .args(["edit", "1", "--mood", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry"));

    let after = load(&temp)[0].clone();
    assert_eq!(after["Id"], before["Id"]);
    assert_eq!(after["Mood"], 9);
    assert_eq!(after["Date"], before["Date"]);
    assert_eq!(after["Title"], before["Title"]);
    assert_eq!(after["Notes"], before["Notes"]);
    assert_eq!(after["Tags"], before["Tags"]);
}

#[test]
fn test_edit_by_id() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "");
    let id = load(&temp)[0]["Id"].as_str().unwrap().to_string();

    moodj_in(temp.path())
        .args(["edit", &id, "--title", "Better day", "--tags", "Gym, sleep"])
        .assert()
        .success();

    let after = &load(&temp)[0];
    assert_eq!(after["Title"], "Better day");
    assert_eq!(after["Tags"], serde_json::json!(["Gym", "sleep"]));
}

#[test]
fn test_edit_invalid_values_change_nothing() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "");
    let before = load(&temp);

    moodj_in(temp.path())
        .args(["edit", "1", "--mood", "12", "--title", "changed"])
        .assert()
        .code(3);
    moodj_in(temp.path())
        .args(["edit", "1", "--date", "the day after"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"));

    assert_eq!(load(&temp), before);
}

#[test]
fn test_edit_out_of_range_position() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "");

    moodj_in(temp.path())
        .args(["edit", "3", "--mood", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Position 3 is out of range (1-1)"));
}

#[test]
fn test_edit_unknown_id() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "");

    moodj_in(temp.path())
        .args(["edit", "3f2504e0-4f89-11d3-9a0c-0305e82c3301", "--mood", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_edit_bad_target() {
    let temp = TempDir::new().unwrap();

    moodj_in(temp.path())
        .args(["edit", "latest", "--mood", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid entry reference"));
}

#[test]
fn test_delete_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "");

    moodj_in(temp.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
    assert_eq!(load(&temp).len(), 1);

    moodj_in(temp.path())
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));
    assert!(load(&temp).is_empty());
}

#[test]
fn test_delete_keeps_other_entries_in_order() {
    let temp = TempDir::new().unwrap();
    add_entry(temp.path(), "2024-01-01", "5", "a", "");
    add_entry(temp.path(), "2024-01-02", "6", "b", "");
    add_entry(temp.path(), "2024-01-03", "7", "c", "");

    // Position 2 in newest-first order is "b"
    moodj_in(temp.path())
        .args(["delete", "2", "--yes"])
        .assert()
        .success();

    let titles: Vec<String> = load(&temp)
        .iter()
        .map(|e| e["Title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["a", "c"]);
}

#[test]
fn test_add_list_delete_scenario() {
    let temp = TempDir::new().unwrap();

    add_entry(temp.path(), "2024-01-01", "7", "Ok day", "work,home");
    moodj_in(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01  mood  7/10  Ok day  [work, home]"));

    moodj_in(temp.path())
        .args(["add", "--date", "2024-01-03", "--mood", "3", "--title", "Bad day"])
        .assert()
        .success();
    let output = moodj_in(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("2024-01-03"));
    assert!(lines[1].contains("2024-01-01"));

    moodj_in(temp.path())
        .args(["delete", "2", "--yes"])
        .assert()
        .success();
    let output = moodj_in(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Bad day"));
}
