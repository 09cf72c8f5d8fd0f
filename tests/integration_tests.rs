//! Integration tests for the roster CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a roster command
fn roster() -> Command {
    Command::cargo_bin("roster").unwrap()
}

/// Helper to write the standard three-person fixture file
fn setup_fixture() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("staff.tsv");
    fs::write(
        &path,
        "Alice\t40\tEng\tLead\t\tMon\tTue\n\
         Bob\t30\tEng\tDev\tAlice\tWed\n\
         Carol\t25\tSales\tRep\tAlice\tMon\n",
    )
    .unwrap();
    (tmp, path)
}

#[test]
fn test_count() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["count", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_list_tsv_preserves_insertion_order() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["list", "--format", "tsv", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "Alice\t40\tEng\tLead\tn/a\tMon Tue\n\
             Bob\t30\tEng\tDev\tAlice\tWed\n\
             Carol\t25\tSales\tRep\tAlice\tMon\n",
        );
}

#[test]
fn test_list_limit() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["list", "--format", "tsv", "-n", "1", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("Bob").not()));
}

#[test]
fn test_show_known_name() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["show", "Bob", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob").and(predicate::str::contains("Dev")));
}

#[test]
fn test_show_unknown_name_fails() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["show", "Nobody", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("name not found"));
}

#[test]
fn test_show_is_case_sensitive() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["show", "alice", "--file"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_dept_lists_members_in_order() {
    let (_tmp, path) = setup_fixture();
    let output = roster()
        .args(["dept", "Eng", "--format", "tsv", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn test_dept_unknown_fails() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["dept", "HR", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("department not found"));
}

#[test]
fn test_dept_without_value_lists_keys() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["dept", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Eng\nSales\n");
}

#[test]
fn test_position_query() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["position", "Lead", "--format", "tsv", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    roster()
        .args(["position", "CEO", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("position not found"));
}

#[test]
fn test_age_range_inclusive() {
    let (_tmp, path) = setup_fixture();
    let output = roster()
        .args(["age", "25", "30", "--format", "tsv", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bob"));
    assert!(stdout.contains("Carol"));
    assert!(!stdout.contains("Alice"));
}

#[test]
fn test_age_inverted_bounds_is_empty_not_error() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["age", "30", "25", "--format", "tsv", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_workdays_membership() {
    let (_tmp, path) = setup_fixture();
    let output = roster()
        .args(["workdays", "Mon", "Wed", "--format", "tsv", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Order is unspecified; verify membership only
    assert!(stdout.contains("Alice"));
    assert!(stdout.contains("Bob"));
    assert!(stdout.contains("Carol"));
    assert_eq!(stdout.matches("Alice").count(), 1);
}

#[test]
fn test_reports_tree() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["reports", "Alice", "--quiet", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Bob\nCarol\n");
}

#[test]
fn test_reports_sentinel_root_lists_forest() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["reports", "n/a", "--quiet", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Alice\n  Bob\n  Carol\n");
}

#[test]
fn test_reports_unknown_name_fails() {
    let (_tmp, path) = setup_fixture();
    roster()
        .args(["reports", "Nobody", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown name"));
}

#[test]
fn test_reports_cycle_terminates() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cycle.tsv");
    fs::write(&path, "A\t30\tEng\tDev\tB\tMon\nB\t31\tEng\tDev\tA\tTue\n").unwrap();

    roster()
        .args(["reports", "A", "--quiet", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("B\n");
}

#[test]
fn test_copy_round_trips_file() {
    let (tmp, path) = setup_fixture();
    let out = tmp.path().join("copy.tsv");

    roster()
        .args(["copy", "--to"])
        .arg(&out)
        .arg("--file")
        .arg(&path)
        .assert()
        .success();

    let original = fs::read_to_string(&path).unwrap();
    let copied = fs::read_to_string(&out).unwrap();
    assert_eq!(copied, original);
}

#[test]
fn test_malformed_age_aborts_with_line_number() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.tsv");
    fs::write(
        &path,
        "Alice\t40\tEng\tLead\t\tMon\nBob\toops\tEng\tDev\tAlice\tWed\n",
    )
    .unwrap();

    roster()
        .args(["count", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2").and(predicate::str::contains("malformed age")));
}

#[test]
fn test_missing_file_fails_with_diagnostic() {
    roster()
        .args(["count", "--file", "/nonexistent/staff.tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load roster"));
}

#[test]
fn test_json_output_is_parseable() {
    let (_tmp, path) = setup_fixture();
    let output = roster()
        .args(["list", "--format", "json", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert_eq!(parsed[0]["name"], "Alice");
    assert_eq!(parsed[0]["supervisor"], "n/a");
}
