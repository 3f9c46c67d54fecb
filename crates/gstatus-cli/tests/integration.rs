//! Integration tests for the gstatus CLI.
//!
//! These tests drive the binary against throwaway repositories.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// Run git in `dir`, failing the test if it fails.
fn git(dir: &TempDir, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {args:?} failed");
}

/// Helper to create a git repository with `count` commits.
fn setup_git_repo(count: usize) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");

    git(&temp, &["init", "-q"]);
    git(&temp, &["config", "user.email", "test@example.com"]);
    git(&temp, &["config", "user.name", "Test User"]);
    git(&temp, &["config", "commit.gpgsign", "false"]);

    let file = temp.path().join("feature.txt");
    for i in 0..count {
        let mut current = fs::read_to_string(&file).unwrap_or_default();
        current.push_str(&format!("line {i}\n"));
        fs::write(&file, &current).expect("Failed to write file");

        git(&temp, &["add", "."]);
        git(&temp, &["commit", "-q", "-m", &format!("Commit {i}")]);
    }

    temp
}

/// Get a command for the gstatus binary.
fn gstatus() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gstatus"))
}

fn log_json(temp: &TempDir, page: usize, page_size: usize) -> serde_json::Value {
    let output = gstatus()
        .args(["log", "--json", "--page-size", &page_size.to_string(), "--page"])
        .arg(page.to_string())
        .arg(temp.path())
        .output()
        .expect("Failed to run gstatus");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("Invalid JSON output")
}

#[test]
fn test_version_flag() {
    gstatus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gstatus"));
}

#[test]
fn test_help_flag() {
    gstatus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("log"))
        .stdout(predicate::str::contains("diff"));
}

#[test]
fn test_no_subcommand_shows_help() {
    gstatus()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_repo_must_be_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not-a-dir");
    fs::write(&file, "x").unwrap();

    gstatus()
        .arg("log")
        .arg(&file)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_log_prints_newest_first() {
    let temp = setup_git_repo(3);

    gstatus()
        .arg("log")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit 2"))
        .stdout(predicate::str::contains("Commit 0"))
        .stdout(predicate::str::contains("Test User"));
}

#[test]
fn test_log_json_pages_are_contiguous() {
    let temp = setup_git_repo(5);

    let first = log_json(&temp, 0, 2);
    let second = log_json(&temp, 1, 2);
    let third = log_json(&temp, 2, 2);

    let first_commits = first["commits"].as_array().unwrap();
    let second_commits = second["commits"].as_array().unwrap();
    assert_eq!(first_commits.len(), 2);
    assert_eq!(second_commits.len(), 2);
    assert_eq!(third["commits"].as_array().unwrap().len(), 1);

    // Last commit of a page links to the first commit of the next one.
    assert_eq!(first_commits[1]["previous_id"], second_commits[0]["id"]);
    assert_eq!(first_commits[0]["message"], "Commit 4");
    assert_eq!(third["commits"][0]["message"], "Commit 0");
    assert!(third["commits"][0].get("previous_id").is_none());
    assert_eq!(third["has_older"], false);
}

#[test]
fn test_log_past_end_is_empty() {
    let temp = setup_git_repo(2);

    let page = log_json(&temp, 5, 10);
    assert!(page["commits"].as_array().unwrap().is_empty());
}

#[test]
fn test_diff_shows_added_lines() {
    let temp = setup_git_repo(2);

    gstatus()
        .args(["diff"])
        .arg(temp.path())
        .args(["HEAD~1", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feature.txt"))
        .stdout(predicate::str::contains("+line 1"))
        .stdout(predicate::str::contains("index ").not());
}

#[test]
fn test_diff_json_has_html_bodies() {
    let temp = setup_git_repo(2);

    let output = gstatus()
        .args(["diff", "--json"])
        .arg(temp.path())
        .args(["HEAD~1", "HEAD"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["diffs"][0]["path"], "feature.txt");
    assert!(json["diffs"][0]["body"].as_str().unwrap().starts_with("<pre"));
}

#[test]
fn test_diff_bad_revision_reports_git_error() {
    let temp = setup_git_repo(1);

    gstatus()
        .args(["diff"])
        .arg(temp.path())
        .args(["nope", "HEAD"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("fatal"));
}

#[test]
fn test_diff_json_error_view() {
    let temp = setup_git_repo(1);

    let output = gstatus()
        .args(["diff", "--json"])
        .arg(temp.path())
        .args(["nope", "HEAD"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["error_msg"].as_str().unwrap().contains("nope"));
}

#[test]
fn test_config_file_sets_page_size() {
    let temp = setup_git_repo(3);
    let config = temp.path().join("gstatus.toml");
    fs::write(&config, "[general]\npage_size = 1\n").unwrap();

    let output = gstatus()
        .args(["log", "--json", "--config"])
        .arg(&config)
        .arg(temp.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["commits"].as_array().unwrap().len(), 1);
    assert_eq!(json["has_older"], true);
}

#[test]
fn test_invalid_config_fails() {
    let temp = setup_git_repo(1);
    let config = temp.path().join("gstatus.toml");
    fs::write(&config, "[general]\npage_size = 0\n").unwrap();

    gstatus()
        .args(["log", "--config"])
        .arg(&config)
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_completions_bash() {
    gstatus()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gstatus"));
}
