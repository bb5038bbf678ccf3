// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `remotes` binary.
//!
//! Each test runs the real executable against a fresh temporary repository.

use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use remotes_rs::cli::{Cli, Command as CliCommand};
use tempfile::TempDir;

fn init_repo() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let status = Command::new("git")
        .args(["init", "-q"])
        .current_dir(dir.path())
        .status()
        .expect("failed to run git init");
    assert!(status.success(), "git init failed");
    dir
}

fn remotes(repo: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_remotes"))
        .arg("-C")
        .arg(repo)
        .args(["-l", "0"])
        .args(args)
        .current_dir(repo)
        .env_remove("REMOTES_GLOBAL__OUTPUT_LOG_LEVEL")
        .env_remove("REMOTES_REPOSITORY__PATH")
        .output()
        .expect("failed to run remotes")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["remotes", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(CliCommand::Version)));
}

#[test]
fn cli_remove_alias() {
    let cli = Cli::try_parse_from(["remotes", "rm", "origin"]).unwrap();
    assert!(matches!(cli.command, Some(CliCommand::Remove(ref args)) if args.name == "origin"));
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn add_list_rename_remove() {
    let repo = init_repo();
    let path = repo.path();

    stdout(&remotes(path, &["add", "origin", "https://example.com/app.git"]));
    stdout(&remotes(path, &["add", "fork", "https://example.com/fork.git"]));

    let names = stdout(&remotes(path, &["names"]));
    insta::assert_snapshot!(names, @r"
    fork
    origin
    ");

    stdout(&remotes(path, &["rename", "origin", "upstream"]));
    stdout(&remotes(path, &["remove", "fork"]));

    let list = stdout(&remotes(path, &["list"]));
    insta::assert_snapshot!(list, @r"
    upstream	https://example.com/app.git (fetch)
    upstream	https://example.com/app.git (push)
    ");
}

#[test]
fn show_json() {
    let repo = init_repo();
    let path = repo.path();
    stdout(&remotes(path, &["add", "origin", "https://example.com/app.git"]));
    stdout(&remotes(
        path,
        &["set-url", "--push", "origin", "ssh://git@example.com/app.git"],
    ));

    let json = stdout(&remotes(path, &["show", "--json", "origin"]));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["name"], "origin");
    assert_eq!(value["url"], "https://example.com/app.git");
    assert_eq!(value["push_url"], "ssh://git@example.com/app.git");
}

#[test]
fn duplicate_add_fails() {
    let repo = init_repo();
    let path = repo.path();
    stdout(&remotes(path, &["add", "origin", "https://example.com/app.git"]));

    let output = remotes(path, &["add", "origin", "https://example.com/other.git"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("remote 'origin' already exists"), "{stderr}");
}

#[test]
fn probe_leaves_config_untouched() {
    let repo = init_repo();
    let path = repo.path();
    let probe = stdout(&remotes(path, &["probe", "https://example.com/app.git"]));
    assert!(probe.contains("(anonymous)"), "{probe}");
    assert_eq!(stdout(&remotes(path, &["names"])), "");
}

#[test]
fn not_a_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = remotes(dir.path(), &["names"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("repository is not available"), "{stderr}");
}
