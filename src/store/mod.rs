// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration store abstraction layer.
//!
//! ```text
//!            ConfigStore (trait)
//!            |                 |
//!            v                 v
//!     GitConfigStore       MemoryStore
//!     reads:  gix          ordered Vec
//!     writes: git CLI      (tests, embedding)
//! ```
//!
//! Stores report absence as `RemoteError::NotFound`, duplicates as
//! `RemoteError::AlreadyExists`, everything else as `RemoteError::Store`.

pub mod git;
pub mod memory;

#[cfg(test)]
mod tests;

use bon::Builder;

use crate::error::RemoteResult;

pub use git::GitConfigStore;
pub use memory::MemoryStore;

/// Plain remote data as persisted in (or produced by) a store.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct RemoteRecord {
    pub name: Option<String>,
    pub url: String,
    pub push_url: Option<String>,
    #[builder(default)]
    pub fetch_refspecs: Vec<String>,
    #[builder(default)]
    pub push_refspecs: Vec<String>,
}

/// Persistent remote configuration of one repository.
///
/// Each mutating call is a single atomic unit as far as the store provides
/// one; callers get no multi-call transactions.
pub trait ConfigStore {
    /// Check that the repository behind this store is still usable.
    fn is_repository_valid(&self) -> bool;

    /// Short description of where the store lives, used in error messages.
    fn location(&self) -> String;

    /// List all remote names, in the store's own order.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Store` if the configuration cannot be read.
    fn list_remote_names(&self) -> RemoteResult<Vec<String>>;

    /// Load one named remote.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` if the remote is absent, or
    /// `RemoteError::Store` for any other read failure.
    fn load_remote(&self, name: &str) -> RemoteResult<RemoteRecord>;

    /// Persist a new remote with the default fetch refspec.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::AlreadyExists`, `RemoteError::InvalidArgument`
    /// or `RemoteError::Store`.
    fn create_remote(&self, name: &str, url: &str) -> RemoteResult<RemoteRecord>;

    /// Build a remote that is never persisted.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidArgument` if the URL is rejected.
    fn create_anonymous_remote(&self, url: &str) -> RemoteResult<RemoteRecord>;

    /// Remove a named remote. Missing names are reported however the store
    /// reports them.
    ///
    /// # Errors
    ///
    /// Returns whatever error the store signals.
    fn delete_remote(&self, name: &str) -> RemoteResult<()>;

    /// Rename a remote and rewrite its default fetch refspec.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` for a missing `old_name`,
    /// `RemoteError::AlreadyExists` if `new_name` is taken, or
    /// `RemoteError::Store`.
    fn rename_remote(&self, old_name: &str, new_name: &str) -> RemoteResult<()>;

    /// Replace the fetch URL of a remote.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` or `RemoteError::Store`.
    fn set_remote_url(&self, name: &str, url: &str) -> RemoteResult<()>;

    /// Set the push URL of a remote.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` or `RemoteError::Store`.
    fn set_remote_push_url(&self, name: &str, url: &str) -> RemoteResult<()>;
}
