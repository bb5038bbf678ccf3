// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               RemoteError (~24 bytes)
//!                      |
//!   +----------+-------+-------+-----------+-------+
//!   |          |       |       |           |       |
//!   v          v       v       v           v       v
//! Invalid   Already  NotFound  Repository  Store   (forwarded
//! Argument  Exists             Unavailable Box     unchanged)
//!
//! StoreError (boxed)
//!   Gix            Discover, FindRemote
//!   CommandFailed  git CLI write failed
//!   CorruptRecord  remote section unreadable
//!   Io             spawning git failed
//! ```
//!
//! `lookup` turns `NotFound` into `None`; everything else reaches the caller
//! as-is.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RemoteError`].
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Failure of a registry or store operation.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Empty or malformed name/URL, or an argument of the wrong shape.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: Box<str> },

    /// A remote with this name is already configured.
    #[error("remote '{name}' already exists")]
    AlreadyExists { name: Box<str> },

    /// No remote with this name is configured.
    #[error("remote '{name}' does not exist")]
    NotFound { name: Box<str> },

    /// The bound repository has been closed or is no longer valid.
    #[error("repository is not available: {path}")]
    RepositoryUnavailable { path: Box<str> },

    /// Opaque failure from the configuration store.
    #[error("config store error: {0}")]
    Store(#[from] Box<StoreError>),
}

impl RemoteError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into().into_boxed_str(),
        }
    }

    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            name: name.into().into_boxed_str(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into().into_boxed_str(),
        }
    }

    pub fn repository_unavailable(path: impl Into<String>) -> Self {
        Self::RepositoryUnavailable {
            path: path.into().into_boxed_str(),
        }
    }

    /// Whether this error means the named remote is absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for RemoteError {
    fn from(err: StoreError) -> Self {
        Self::Store(Box::new(err))
    }
}

impl From<GixError> for RemoteError {
    fn from(err: GixError) -> Self {
        Self::Store(Box::new(StoreError::Gix(err)))
    }
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover the repository.
    #[error("failed to open repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to read a remote section from the repository config.
    #[error("failed to read remote: {0}")]
    FindRemote(#[from] Box<gix::remote::find::existing::Error>),
}

// --- Store Errors ---

/// Configuration store failures that this layer does not decode further.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// A remote section exists but cannot be turned into a record.
    #[error("corrupt remote record '{name}': {message}")]
    CorruptRecord { name: String, message: String },

    /// I/O error talking to the store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override.
    #[error("invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),
}
