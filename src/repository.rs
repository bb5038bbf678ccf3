// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository binding shared by a registry and its callers.
//!
//! ```text
//! Arc<Repository<S>>
//!   open flag   cleared by close()
//!   store: S    ConfigStore
//!
//! is_valid() = open && store.is_repository_valid()
//! ```

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{RemoteError, RemoteResult};
use crate::store::{ConfigStore, GitConfigStore};

/// A repository whose configuration holds the remotes.
#[derive(Debug)]
pub struct Repository<S> {
    store: S,
    open: AtomicBool,
}

impl<S: ConfigStore> Repository<S> {
    pub const fn new(store: S) -> Self {
        Self {
            store,
            open: AtomicBool::new(true),
        }
    }

    /// Invalidate the binding. Every later registry call fails with
    /// `RepositoryUnavailable`.
    pub fn close(&self) {
        self.open.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.open.load(Ordering::Acquire) && self.store.is_repository_valid()
    }

    /// Borrow the store if the repository is still valid.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable` if the repository has been
    /// closed or its store reports it gone.
    pub fn store(&self) -> RemoteResult<&S> {
        if self.is_valid() {
            Ok(&self.store)
        } else {
            Err(RemoteError::repository_unavailable(self.store.location()))
        }
    }
}

impl Repository<GitConfigStore> {
    /// Bind to the git repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable` if `path` is not a git
    /// repository.
    pub fn open(path: &Path) -> RemoteResult<Arc<Self>> {
        let repo = Self::new(GitConfigStore::new(path));
        repo.store()?;
        Ok(Arc::new(repo))
    }
}
