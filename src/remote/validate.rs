// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Name and URL checks applied before any store call.
//!
//! ```text
//! validate_name  "origin"            ok
//!                ""                  InvalidArgument
//! validate_url   "git@host:org/r"    ok  (scp-like)
//!                "https://h/r.git"   ok
//!                "/srv/repo.git"     ok  (local path)
//!                "" or blank         InvalidArgument
//! ```
//!
//! URL structure is whatever `gix::url::parse` accepts. No I/O.

use gix::bstr::ByteSlice;

use crate::error::{RemoteError, RemoteResult};

/// Require a non-empty remote name.
///
/// # Errors
///
/// Returns `RemoteError::InvalidArgument` if `name` is empty.
pub fn validate_name(name: &str) -> RemoteResult<()> {
    if name.is_empty() {
        return Err(RemoteError::invalid_argument("remote name must not be empty"));
    }
    Ok(())
}

/// Require a non-empty, well-formed remote URL.
///
/// # Errors
///
/// Returns `RemoteError::InvalidArgument` if `url` is empty or cannot be
/// parsed as a git URL.
pub fn validate_url(url: &str) -> RemoteResult<()> {
    if url.trim().is_empty() {
        return Err(RemoteError::invalid_argument("remote url must not be empty"));
    }
    gix::url::parse(url.as_bytes().as_bstr())
        .map_err(|e| RemoteError::invalid_argument(format!("invalid remote url '{url}': {e}")))?;
    Ok(())
}
