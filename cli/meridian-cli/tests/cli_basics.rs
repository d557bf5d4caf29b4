// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, aliases

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]
// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn meridian_cmd() -> Command {
    Command::cargo_bin("meridian").expect("Failed to find meridian binary")
}

#[test]
fn test_meridian_version() {
    meridian_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("meridian"));
}

#[test]
fn test_meridian_help_short() {
    meridian_cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("people"));
}

#[test]
fn test_meridian_help_long() {
    meridian_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("people"));
}

#[test]
fn test_meridian_help_subcommand() {
    meridian_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("people"));
}

#[test]
fn test_meridian_people_help() {
    meridian_cmd()
        .args(["people", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_meridian_people_list_help() {
    meridian_cmd()
        .args(["people", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_rooms_help() {
    meridian_cmd()
        .args(["rooms", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_meridian_webhooks_help() {
    meridian_cmd()
        .args(["webhooks", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_devices_help() {
    meridian_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_queues_help() {
    meridian_cmd()
        .args(["queues", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_profile_help() {
    meridian_cmd()
        .args(["profile", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_invalid_subcommand() {
    meridian_cmd()
        .arg("nonexistent-subcommand")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_meridian_no_client_config_fails() {
    meridian_cmd()
        .args(["people", "list"])
        .env("MERIDIAN_CONFIG_DIR", "/nonexistent")
        .env_remove("MERIDIAN_PROFILE")
        .env_remove("MERIDIAN_URL")
        .env_remove("MERIDIAN_ACCESS_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile configured"));
}

// Test aliases
#[test]
fn test_meridian_people_ls_alias() {
    meridian_cmd()
        .args(["people", "ls", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_rooms_rm_alias() {
    meridian_cmd()
        .args(["rooms", "rm", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_meridian_profile_ls_alias() {
    meridian_cmd()
        .args(["profile", "ls", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}
