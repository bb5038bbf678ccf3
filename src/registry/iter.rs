// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Snapshot-then-materialize enumeration.
//!
//! ```text
//! list_remote_names ──> snapshot ["a","b","c"]   (never re-read)
//!                            |
//!      each_name:  visit("a") visit("b") visit("c")
//!      each:       load("a") -> visit, load("b") -> visit, ...
//!                  load fails (gone, corrupt)  => stop, Err
//!                  visitor returns Break(b)    => stop, Ok(Break(b))
//! ```
//!
//! `remotes()` and `names()` return the same protocol as lazy sequences. Each
//! traversal takes a fresh snapshot on its first `next()`.

use std::iter::FusedIterator;
use std::ops::ControlFlow;

use tracing::{debug, warn};

use super::RemoteRegistry;
use crate::error::RemoteResult;
use crate::remote::RemoteHandle;
use crate::store::ConfigStore;

impl<S: ConfigStore> RemoteRegistry<S> {
    fn snapshot(&self) -> RemoteResult<Vec<String>> {
        let names = self.store()?.list_remote_names()?;
        debug!(count = names.len(), "snapshot of remote names");
        Ok(names)
    }

    fn materialize(&self, name: &str) -> RemoteResult<RemoteHandle> {
        self.store()?
            .load_remote(name)
            .map(RemoteHandle::from)
            .inspect_err(|e| {
                if e.is_not_found() {
                    warn!(remote = name, "remote disappeared during iteration");
                }
            })
    }

    /// Visit every remote, in snapshot order.
    ///
    /// Stops at the first `ControlFlow::Break` and hands its value back as
    /// `Ok(ControlFlow::Break(_))`.
    ///
    /// # Errors
    ///
    /// Returns the snapshot error before any visit, or the materialization
    /// error of the first remote that cannot be loaded, including
    /// `RemoteError::NotFound` for a remote deleted after the snapshot.
    /// Remotes after it are not visited.
    pub fn each<B, F>(&self, mut visitor: F) -> RemoteResult<ControlFlow<B>>
    where
        F: FnMut(RemoteHandle) -> ControlFlow<B>,
    {
        for name in self.snapshot()? {
            let remote = self.materialize(&name)?;
            if let ControlFlow::Break(value) = visitor(remote) {
                debug!(remote = %name, "iteration stopped by visitor");
                return Ok(ControlFlow::Break(value));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Visit every remote name, in snapshot order.
    ///
    /// Names are passed verbatim and never loaded, so a remote deleted after
    /// the snapshot is still visited.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::RepositoryUnavailable` or the snapshot error.
    pub fn each_name<B, F>(&self, mut visitor: F) -> RemoteResult<ControlFlow<B>>
    where
        F: FnMut(String) -> ControlFlow<B>,
    {
        for name in self.snapshot()? {
            if let ControlFlow::Break(value) = visitor(name) {
                return Ok(ControlFlow::Break(value));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Lazy sequence of remotes. Nothing is read until it is iterated.
    #[must_use]
    pub const fn remotes(&self) -> Remotes<'_, S> {
        Remotes { registry: self }
    }

    /// Lazy sequence of remote names. Nothing is read until it is iterated.
    #[must_use]
    pub const fn names(&self) -> RemoteNames<'_, S> {
        RemoteNames { registry: self }
    }
}

// --- Snapshot cursor ---

#[derive(Debug)]
enum Cursor {
    Pending,
    Active(std::vec::IntoIter<String>),
    Done,
}

impl Cursor {
    fn next_name<S: ConfigStore>(
        &mut self,
        registry: &RemoteRegistry<S>,
    ) -> Option<RemoteResult<String>> {
        if matches!(self, Self::Pending) {
            match registry.snapshot() {
                Ok(names) => *self = Self::Active(names.into_iter()),
                Err(e) => {
                    *self = Self::Done;
                    return Some(Err(e));
                }
            }
        }
        match self {
            Self::Active(names) => {
                let name = names.next();
                if name.is_none() {
                    *self = Self::Done;
                }
                name.map(Ok)
            }
            Self::Pending | Self::Done => None,
        }
    }
}

// --- Remotes ---

/// Restartable sequence of remotes; every traversal re-snapshots.
#[derive(Debug)]
pub struct Remotes<'a, S> {
    registry: &'a RemoteRegistry<S>,
}

impl<S> Clone for Remotes<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Remotes<'_, S> {}

impl<'a, S: ConfigStore> IntoIterator for Remotes<'a, S> {
    type Item = RemoteResult<RemoteHandle>;
    type IntoIter = RemotesIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        RemotesIter {
            registry: self.registry,
            cursor: Cursor::Pending,
        }
    }
}

impl<'a, S: ConfigStore> IntoIterator for &Remotes<'a, S> {
    type Item = RemoteResult<RemoteHandle>;
    type IntoIter = RemotesIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        (*self).into_iter()
    }
}

/// One traversal of [`Remotes`]. Yields at most one `Err`, then ends.
#[derive(Debug)]
pub struct RemotesIter<'a, S> {
    registry: &'a RemoteRegistry<S>,
    cursor: Cursor,
}

impl<S: ConfigStore> Iterator for RemotesIter<'_, S> {
    type Item = RemoteResult<RemoteHandle>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = match self.cursor.next_name(self.registry)? {
            Ok(name) => name,
            Err(e) => return Some(Err(e)),
        };
        let remote = self.registry.materialize(&name);
        if remote.is_err() {
            self.cursor = Cursor::Done;
        }
        Some(remote)
    }
}

impl<S: ConfigStore> FusedIterator for RemotesIter<'_, S> {}

// --- RemoteNames ---

/// Restartable sequence of remote names; every traversal re-snapshots.
#[derive(Debug)]
pub struct RemoteNames<'a, S> {
    registry: &'a RemoteRegistry<S>,
}

impl<S> Clone for RemoteNames<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for RemoteNames<'_, S> {}

impl<'a, S: ConfigStore> IntoIterator for RemoteNames<'a, S> {
    type Item = RemoteResult<String>;
    type IntoIter = RemoteNamesIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        RemoteNamesIter {
            registry: self.registry,
            cursor: Cursor::Pending,
        }
    }
}

impl<'a, S: ConfigStore> IntoIterator for &RemoteNames<'a, S> {
    type Item = RemoteResult<String>;
    type IntoIter = RemoteNamesIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        (*self).into_iter()
    }
}

/// One traversal of [`RemoteNames`]. Yields at most one `Err`, then ends.
#[derive(Debug)]
pub struct RemoteNamesIter<'a, S> {
    registry: &'a RemoteRegistry<S>,
    cursor: Cursor,
}

impl<S: ConfigStore> Iterator for RemoteNamesIter<'_, S> {
    type Item = RemoteResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_name(self.registry)
    }
}

impl<S: ConfigStore> FusedIterator for RemoteNamesIter<'_, S> {}
