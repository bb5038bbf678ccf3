// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git repository configuration as a remote store.
//!
//! ```text
//! reads  (gix, no subprocess)      writes (git CLI)
//!   is_repository_valid              git remote add
//!   list_remote_names                git remote remove
//!   load_remote                      git remote rename
//!   create_anonymous_remote          git remote set-url [--push]
//! ```
//!
//! The repository is re-discovered for every read so configuration written by
//! the CLI (or any other process) is always visible. `path` may be any
//! directory inside a work tree. Positional arguments always follow `--`.

use std::fmt::Display;
use std::path::PathBuf;
use std::process::Command;

use gix::remote::Direction;
use tracing::trace;

use super::{ConfigStore, RemoteRecord};
use crate::error::{GixError, RemoteError, RemoteResult, StoreError};

/// Store backed by the `.git/config` of a repository on disk.
#[derive(Debug, Clone)]
pub struct GitConfigStore {
    path: PathBuf,
}

impl GitConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> RemoteResult<gix::Repository> {
        gix::discover(&self.path).map_err(|e| GixError::Discover(Box::new(e)).into())
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never`, `GIT_TERMINAL_PROMPT=0`
    /// and `LC_ALL=C` so failures can be classified by their message.
    fn git_command(&self, args: &[&str], subject: &str) -> RemoteResult<String> {
        trace!(args = ?args, path = %self.path.display(), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .output()
            .map_err(|e| {
                StoreError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to execute git: {e}"),
                ))
            })?;

        if !output.status.success() {
            let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(args, subject, message));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Map a failed `git remote` invocation onto the registry taxonomy.
pub(super) fn classify_failure(args: &[&str], subject: &str, message: String) -> RemoteError {
    let lower = message.to_lowercase();
    if lower.contains("no such remote") {
        RemoteError::not_found(subject)
    } else if lower.contains("already exists") {
        RemoteError::already_exists(subject)
    } else if lower.contains("not a valid remote name") {
        RemoteError::invalid_argument(message)
    } else {
        StoreError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            message,
        }
        .into()
    }
}

/// A URL gix refuses to turn into a remote is the caller's argument, not a
/// store failure.
pub(super) fn invalid_anonymous_url(url: &str, err: impl Display) -> RemoteError {
    RemoteError::invalid_argument(format!("invalid remote url '{url}': {err}"))
}

fn record_from_remote(name: Option<&str>, remote: &gix::Remote<'_>) -> RemoteResult<RemoteRecord> {
    let url = remote
        .url(Direction::Fetch)
        .ok_or_else(|| StoreError::CorruptRecord {
            name: name.unwrap_or("<anonymous>").to_string(),
            message: "remote has no url".to_string(),
        })?
        .to_bstring()
        .to_string();
    let push_url = remote
        .url(Direction::Push)
        .map(|u| u.to_bstring().to_string());
    let refspecs = |direction| {
        remote
            .refspecs(direction)
            .iter()
            .map(|spec| spec.to_ref().to_bstring().to_string())
            .collect::<Vec<_>>()
    };

    Ok(RemoteRecord::builder()
        .maybe_name(name.map(str::to_string))
        .url(url)
        .maybe_push_url(push_url)
        .fetch_refspecs(refspecs(Direction::Fetch))
        .push_refspecs(refspecs(Direction::Push))
        .build())
}

impl ConfigStore for GitConfigStore {
    fn is_repository_valid(&self) -> bool {
        gix::discover(&self.path).is_ok()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn list_remote_names(&self) -> RemoteResult<Vec<String>> {
        let repo = self.open()?;
        Ok(repo
            .remote_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect())
    }

    fn load_remote(&self, name: &str) -> RemoteResult<RemoteRecord> {
        let repo = self.open()?;
        match repo.find_remote(name) {
            Ok(remote) => record_from_remote(Some(name), &remote),
            Err(gix::remote::find::existing::Error::NotFound { .. }) => {
                Err(RemoteError::not_found(name))
            }
            Err(e) => Err(GixError::FindRemote(Box::new(e)).into()),
        }
    }

    fn create_remote(&self, name: &str, url: &str) -> RemoteResult<RemoteRecord> {
        self.git_command(&["remote", "add", "--", name, url], name)?;
        self.load_remote(name)
    }

    fn create_anonymous_remote(&self, url: &str) -> RemoteResult<RemoteRecord> {
        let repo = self.open()?;
        let remote = repo
            .remote_at(url)
            .map_err(|e| invalid_anonymous_url(url, e))?;
        record_from_remote(None, &remote)
    }

    fn delete_remote(&self, name: &str) -> RemoteResult<()> {
        self.git_command(&["remote", "remove", "--", name], name)?;
        Ok(())
    }

    fn rename_remote(&self, old_name: &str, new_name: &str) -> RemoteResult<()> {
        // "already exists" always refers to the target name.
        match self.git_command(&["remote", "rename", "--", old_name, new_name], old_name) {
            Err(RemoteError::AlreadyExists { .. }) => Err(RemoteError::already_exists(new_name)),
            other => other.map(drop),
        }
    }

    fn set_remote_url(&self, name: &str, url: &str) -> RemoteResult<()> {
        self.git_command(&["remote", "set-url", "--", name, url], name)?;
        Ok(())
    }

    fn set_remote_push_url(&self, name: &str, url: &str) -> RemoteResult<()> {
        self.git_command(&["remote", "set-url", "--push", "--", name, url], name)?;
        Ok(())
    }
}
