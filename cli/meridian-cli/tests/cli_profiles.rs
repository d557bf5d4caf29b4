// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile CLI tests
//!
//! Each test gets its own MERIDIAN_CONFIG_DIR, so profile state never
//! leaks between tests and the suite can run in parallel.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]
// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn meridian_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("meridian").expect("Failed to find meridian binary");
    cmd.env("MERIDIAN_CONFIG_DIR", config_dir);
    cmd.env_remove("MERIDIAN_PROFILE");
    cmd
}

fn create_profile(config_dir: &Path, name: &str) {
    meridian_cmd(config_dir)
        .args([
            "profile",
            "create",
            name,
            "--url",
            "https://api.meridian.example/v1",
            "--token",
            "test-access-token",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Created profile '{}'",
            name
        )));
}

#[test]
fn test_profile_create_and_get() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "staging");

    let output = meridian_cmd(dir.path())
        .args(["profile", "get", "-j", "staging"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let profile: Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(profile["name"], "staging");
    assert_eq!(profile["url"], "https://api.meridian.example/v1");
    assert_eq!(profile["token"], "test-access-token");
}

#[test]
fn test_profile_create_sets_current() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "staging");

    // get without a name resolves the current profile
    let output = meridian_cmd(dir.path())
        .args(["profile", "get", "-j"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let profile: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON");
    assert_eq!(profile["name"], "staging");
}

#[test]
fn test_profile_create_no_set_current() {
    let dir = tempfile::tempdir().expect("tempdir");

    meridian_cmd(dir.path())
        .args([
            "profile",
            "create",
            "lab",
            "--url",
            "https://lab.meridian.example/v1",
            "--token",
            "lab-token",
            "--no-set-current",
        ])
        .assert()
        .success();

    meridian_cmd(dir.path())
        .args(["profile", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No current profile set"));
}

#[test]
fn test_profile_duplicate_create_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "staging");

    meridian_cmd(dir.path())
        .args([
            "profile",
            "create",
            "staging",
            "--url",
            "https://api.meridian.example/v1",
            "--token",
            "test-access-token",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_profile_list_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "alpha");
    create_profile(dir.path(), "beta");

    let output = meridian_cmd(dir.path())
        .args(["profile", "list", "-j"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let profiles: Vec<Value> =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON array");
    let names: Vec<&str> = profiles
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[test]
fn test_profile_list_empty() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = meridian_cmd(dir.path())
        .args(["profile", "list", "-j"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let profiles: Vec<Value> =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON array");
    assert!(profiles.is_empty());
}

#[test]
fn test_profile_list_marks_current() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "alpha");
    create_profile(dir.path(), "beta");

    // beta was created last, so it is current
    meridian_cmd(dir.path())
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*"));
}

#[test]
fn test_profile_set_current_and_previous() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "alpha");
    create_profile(dir.path(), "beta");

    meridian_cmd(dir.path())
        .args(["profile", "set-current", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current profile: alpha"));

    // '-' flips back to the previous profile
    meridian_cmd(dir.path())
        .args(["profile", "set-current", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current profile: beta"));
}

#[test]
fn test_profile_set_current_missing_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    meridian_cmd(dir.path())
        .args(["profile", "set-current", "nosuch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read profile"));
}

#[test]
fn test_profile_delete_current_requires_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "staging");

    meridian_cmd(dir.path())
        .args(["profile", "delete", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    meridian_cmd(dir.path())
        .args(["profile", "delete", "staging", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted profile 'staging'"));

    // Gone from the listing too
    let output = meridian_cmd(dir.path())
        .args(["profile", "list", "-j"])
        .output()
        .expect("Failed to run command");
    let profiles: Vec<Value> =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON array");
    assert!(profiles.is_empty());
}

#[test]
fn test_profile_delete_non_current() {
    let dir = tempfile::tempdir().expect("tempdir");
    create_profile(dir.path(), "alpha");
    create_profile(dir.path(), "beta");

    // alpha is not current (beta is), so no --force needed
    meridian_cmd(dir.path())
        .args(["profile", "delete", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted profile 'alpha'"));

    let output = meridian_cmd(dir.path())
        .args(["profile", "get", "-j"])
        .output()
        .expect("Failed to run command");
    let profile: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON");
    assert_eq!(profile["name"], "beta");
}

#[test]
fn test_profile_get_missing_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    meridian_cmd(dir.path())
        .args(["profile", "get", "nosuch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read profile"));
}
