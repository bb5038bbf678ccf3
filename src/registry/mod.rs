// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote registry: the remotes of one repository.
//!
//! ```text
//!            RemoteRegistry<S>
//!   create / create_anonymous / lookup / delete
//!   rename / set_url / set_push_url
//!   each / each_name / remotes / names   (iter.rs)
//!                   |
//!        Repository::store()  -- RepositoryUnavailable
//!                   |
//!                   v
//!             ConfigStore (S)
//! ```
//!
//! Every call checks repository liveness before its first store call and
//! forwards store failures unchanged. The registry caches nothing.

mod iter;


use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{RemoteError, RemoteResult};
use crate::remote::validate::{validate_name, validate_url};
use crate::remote::{RemoteHandle, RemoteTarget};
use crate::repository::Repository;
use crate::store::ConfigStore;

pub use iter::{RemoteNames, RemoteNamesIter, Remotes, RemotesIter};

/// Capability object for the remotes of one repository.
#[derive(Debug)]
pub struct RemoteRegistry<S> {
    repo: Arc<Repository<S>>,
}

impl<S> Clone for RemoteRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<S: ConfigStore> RemoteRegistry<S> {
    pub const fn new(repo: Arc<Repository<S>>) -> Self {
        Self { repo }
    }

    #[must_use]
    pub const fn repository(&self) -> &Arc<Repository<S>> {
        &self.repo
    }

    fn store(&self) -> RemoteResult<&S> {
        self.repo.store()
    }

    /// Persist a new remote with the default fetch refspec.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable`, `RemoteError::InvalidArgument`
    /// for an empty name or malformed URL, `RemoteError::AlreadyExists` if the
    /// name is taken, or the store's own error.
    pub fn create(&self, name: &str, url: &str) -> RemoteResult<RemoteHandle> {
        let store = self.store()?;
        validate_name(name)?;
        validate_url(url)?;

        debug!(remote = name, url, "creating remote");
        let record = store.create_remote(name, url)?;
        info!(remote = name, url, "created remote");
        Ok(record.into())
    }

    /// Build a remote for `url` that is never written to the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable` or
    /// `RemoteError::InvalidArgument`.
    pub fn create_anonymous(&self, url: &str) -> RemoteResult<RemoteHandle> {
        let store = self.store()?;
        validate_url(url)?;

        debug!(url, "creating anonymous remote");
        Ok(store.create_anonymous_remote(url)?.into())
    }

    /// Look up a remote by name. Absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable`,
    /// `RemoteError::InvalidArgument` for an empty name, or any store failure
    /// other than the remote being absent.
    pub fn lookup(&self, name: &str) -> RemoteResult<Option<RemoteHandle>> {
        let store = self.store()?;
        validate_name(name)?;

        match store.load_remote(name) {
            Ok(record) => Ok(Some(record.into())),
            Err(e) if e.is_not_found() => {
                debug!(remote = name, "remote not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a remote given its name or a handle to it.
    ///
    /// A missing remote is not treated specially: the store decides.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable`,
    /// `RemoteError::InvalidArgument` for an anonymous handle or empty name,
    /// or whatever the store reports (typically `RemoteError::NotFound`).
    pub fn delete(&self, target: impl Into<RemoteTarget>) -> RemoteResult<()> {
        let store = self.store()?;
        let target = target.into();
        let name = target.name().ok_or_else(|| {
            RemoteError::invalid_argument("expected a remote name or a named remote handle")
        })?;
        validate_name(name)?;

        store.delete_remote(name)?;
        info!(remote = name, "deleted remote");
        Ok(())
    }

    /// Rename a remote and return it as it now reads from the store.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable`,
    /// `RemoteError::InvalidArgument`, `RemoteError::NotFound` for a missing
    /// `old_name`, `RemoteError::AlreadyExists` if `new_name` is taken, or the
    /// store's own error.
    pub fn rename(&self, old_name: &str, new_name: &str) -> RemoteResult<RemoteHandle> {
        let store = self.store()?;
        validate_name(old_name)?;
        validate_name(new_name)?;

        store.rename_remote(old_name, new_name)?;
        info!(from = old_name, to = new_name, "renamed remote");
        Ok(store.load_remote(new_name)?.into())
    }

    /// Replace the fetch URL of a remote.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable`,
    /// `RemoteError::InvalidArgument`, or the store's error for the remote.
    pub fn set_url(&self, name: &str, url: &str) -> RemoteResult<()> {
        let store = self.store()?;
        validate_name(name)?;
        validate_url(url)?;

        store.set_remote_url(name, url)?;
        info!(remote = name, url, "set remote url");
        Ok(())
    }

    /// Set a push URL distinct from the fetch URL.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable`,
    /// `RemoteError::InvalidArgument`, or the store's error for the remote.
    pub fn set_push_url(&self, name: &str, url: &str) -> RemoteResult<()> {
        let store = self.store()?;
        validate_name(name)?;
        validate_url(url)?;

        store.set_remote_push_url(name, url)?;
        info!(remote = name, url, "set remote push url");
        Ok(())
    }
}
