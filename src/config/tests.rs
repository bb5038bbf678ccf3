// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::PathBuf;

use super::loader::parse_override;
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, None);
    assert!(!config.global.log_json);
    assert!(!config.global.log_timestamps);
    assert_eq!(config.repository.path, PathBuf::from("."));
}

#[test]
fn test_empty_sources_yield_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.global, Config::default().global);
    assert_eq!(config.repository, Config::default().repository);
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/remotes.log"
log_timestamps = true

[repository]
path = "/srv/git/project"
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_timestamps);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/remotes.log"))
    );
    assert_eq!(config.repository.path, PathBuf::from("/srv/git/project"));
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(Config::parse("[global]\ndry = true").is_err());
    assert!(Config::parse("[tasks]\nname = \"x\"").is_err());
}

#[test]
fn test_config_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    writeln!(file, "[repository]\npath = \"checkout\"").expect("write temp config");

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.repository.path, PathBuf::from("checkout"));
}

#[test]
fn test_missing_required_file_is_an_error() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/remotes.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_later_sources_win() {
    let config = Config::builder()
        .add_toml_str("[global]\noutput_log_level = 1\nfile_log_level = 1")
        .add_toml_str("[global]\noutput_log_level = 2")
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::ERROR);
}

#[test]
fn test_overrides_beat_files() {
    let config = Config::builder()
        .add_toml_str("[repository]\npath = \"from-file\"")
        .apply_overrides(&["repository.path=from-cli", "global/output_log_level=0"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.repository.path, PathBuf::from("from-cli"));
    assert_eq!(config.global.output_log_level, LogLevel::SILENT);
}

#[test]
fn test_parse_override() {
    insta::assert_debug_snapshot!(
        [
            parse_override("global.log_file=remotes.log").map_err(|e| e.to_string()),
            parse_override("repository/path = ../other").map_err(|e| e.to_string()),
            parse_override("no-equals-sign").map_err(|e| e.to_string()),
            parse_override("=value").map_err(|e| e.to_string()),
        ],
        @r#"
    [
        Ok(
            (
                "global.log_file",
                "remotes.log",
            ),
        ),
        Ok(
            (
                "repository.path",
                "../other",
            ),
        ),
        Err(
            "invalid override 'no-equals-sign', expected KEY=VALUE",
        ),
        Err(
            "invalid override '=value', expected KEY=VALUE",
        ),
    ]
    "#
    );
}

#[test]
fn test_apply_overrides_rejects_malformed_entry() {
    let err = ConfigLoader::new()
        .apply_overrides(&["repository.path"])
        .err()
        .expect("malformed override should fail");
    insta::assert_snapshot!(err.to_string(), @"invalid override 'repository.path', expected KEY=VALUE");
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 2")
        .add_toml_file_optional("/nonexistent/optional.toml");

    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
    ]
    "#);
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[global]
log_file = "remotes.log"

[repository]
path = "/work/repo"
"#,
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level   = 5
    global.log_file         = remotes.log
    global.log_json         = false
    global.log_timestamps   = false
    global.output_log_level = 3
    repository.path         = /work/repo
    ");
}

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_env_vars_for_known_sections_apply() {
    let config = Config::builder()
        .with_env_prefix("REMOTES")
        .build_with_env(env(&[
            ("REMOTES_GLOBAL__OUTPUT_LOG_LEVEL", "4"),
            ("REMOTES_REPOSITORY__PATH", "/env/repo"),
        ]))
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.repository.path, PathBuf::from("/env/repo"));
}

#[test]
fn test_unrelated_prefixed_env_vars_are_ignored() {
    let config = Config::builder()
        .with_env_prefix("REMOTES")
        .build_with_env(env(&[
            ("REMOTES_FOO", "1"),
            ("REMOTES_TOKEN", "secret"),
            ("REMOTES_GLOBALX__DRY", "true"),
            ("PATH", "/usr/bin"),
        ]))
        .unwrap();
    assert_eq!(config.global, Config::default().global);
    assert_eq!(config.repository, Config::default().repository);
}

#[test]
fn test_unknown_key_in_known_section_is_rejected() {
    let result = Config::builder()
        .with_env_prefix("REMOTES")
        .build_with_env(env(&[("REMOTES_GLOBAL__DRY", "true")]));
    assert!(result.is_err());
}
