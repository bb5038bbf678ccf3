// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests layered sources the way the binary assembles them.

use std::fs;
use std::path::PathBuf;

use remotes_rs::config::Config;
use remotes_rs::logging::LogLevel;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_layers_files_then_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("remotes.toml");
    let extra = dir.path().join("extra.toml");
    fs::write(
        &local,
        "[global]\noutput_log_level = 1\n\n[repository]\npath = \"local\"\n",
    )
    .unwrap();
    fs::write(&extra, "[repository]\npath = \"extra\"\n").unwrap();

    let config = Config::builder()
        .add_toml_file_optional(&local)
        .add_toml_file(&extra)
        .apply_overrides(&["global.file_log_level=2"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
    assert_eq!(config.global.file_log_level, LogLevel::WARN);
    assert_eq!(config.repository.path, PathBuf::from("extra"));
}

#[test]
fn config_loaded_files_report() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("remotes.toml");
    fs::write(&local, "").unwrap();

    let loader = Config::builder()
        .add_toml_file_optional(&local)
        .add_toml_file_optional(dir.path().join("missing.toml"));
    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [optional] {}", local.display())]
    );
}

#[test]
fn config_invalid_toml_is_error() {
    assert!(Config::parse("[global\noutput_log_level = ").is_err());
}

#[test]
fn config_round_trips_through_format_options() {
    let config = Config::parse("[repository]\npath = \"/srv/repo\"").unwrap();
    let options = config.format_options();
    assert!(
        options
            .iter()
            .any(|line| line.starts_with("repository.path") && line.ends_with("/srv/repo"))
    );
}
