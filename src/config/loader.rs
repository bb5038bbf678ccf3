// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(remotes.toml)
//!   .add_toml_file(--ini)
//!   .with_env_prefix(REMOTES)
//!   .apply_overrides(--set)
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Top-level tables of `Config`, as they appear in environment variables.
const CONFIG_SECTIONS: [&str; 2] = ["global", "repository"];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file is read by `build()`, which fails if it is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Read `<PREFIX>_<SECTION>__<KEY>` environment variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("config error: {e}"))?;
        Ok(self)
    }

    /// Apply `section.key=value` overrides in order. `section/key` is
    /// accepted as well.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` for an entry without `=` or
    /// with an empty key.
    pub fn apply_overrides<S: AsRef<str>>(self, overrides: &[S]) -> Result<Self> {
        overrides.iter().try_fold(self, |loader, entry| {
            let (key, value) = parse_override(entry.as_ref())?;
            loader.set(&key, value)
        })
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        self.build_with_env(std::env::vars())
    }

    /// Like [`ConfigLoader::build`], reading environment variables from `vars`.
    ///
    /// Only `<PREFIX>_GLOBAL__*` and `<PREFIX>_REPOSITORY__*` are considered;
    /// other variables sharing the prefix are ignored.
    pub(crate) fn build_with_env<I>(self, vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(section_env_vars(prefix, vars))),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        Ok(config)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the variables that name a known section under `prefix`.
fn section_env_vars<I>(prefix: &str, vars: I) -> config::Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let scopes: Vec<String> = CONFIG_SECTIONS
        .iter()
        .map(|section| format!("{prefix}_{section}__").to_uppercase())
        .collect();
    vars.into_iter()
        .filter(|(key, _)| {
            let key = key.to_uppercase();
            scopes.iter().any(|scope| key.starts_with(scope.as_str()))
        })
        .collect()
}

/// Split `section.key=value` (or `section/key=value`) into a dotted key and
/// its raw value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidOverride` when there is no `=` or the key is
/// empty.
pub fn parse_override(entry: &str) -> std::result::Result<(String, String), ConfigError> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidOverride(entry.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::InvalidOverride(entry.to_string()));
    }
    Ok((key.replace('/', "."), value.trim().to_string()))
}
