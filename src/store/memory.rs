// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-process configuration store.
//!
//! Keeps remotes in insertion order, which is also the order
//! `list_remote_names` reports them in.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ConfigStore, RemoteRecord};
use crate::error::{RemoteError, RemoteResult};
use crate::remote::default_fetch_refspec;

/// Volatile store backed by an ordered list.
#[derive(Debug)]
pub struct MemoryStore {
    remotes: Mutex<Vec<RemoteRecord>>,
    valid: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remotes: Mutex::new(Vec::new()),
            valid: AtomicBool::new(true),
        }
    }

    /// Make the store report its repository as gone.
    pub fn invalidate(&self) {
        self.valid.store(false, Ordering::Release);
    }

    fn remotes(&self) -> MutexGuard<'_, Vec<RemoteRecord>> {
        // Mutations are single writes; a poisoned list is still consistent.
        self.remotes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_remote<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut RemoteRecord) -> T,
    ) -> RemoteResult<T> {
        let mut remotes = self.remotes();
        remotes
            .iter_mut()
            .find(|r| r.name.as_deref() == Some(name))
            .map(f)
            .ok_or_else(|| RemoteError::not_found(name))
    }
}

impl ConfigStore for MemoryStore {
    fn is_repository_valid(&self) -> bool {
        self.valid.load(Ordering::Acquire)
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn list_remote_names(&self) -> RemoteResult<Vec<String>> {
        Ok(self
            .remotes()
            .iter()
            .filter_map(|r| r.name.clone())
            .collect())
    }

    fn load_remote(&self, name: &str) -> RemoteResult<RemoteRecord> {
        self.with_remote(name, |r| r.clone())
    }

    fn create_remote(&self, name: &str, url: &str) -> RemoteResult<RemoteRecord> {
        let mut remotes = self.remotes();
        if remotes.iter().any(|r| r.name.as_deref() == Some(name)) {
            return Err(RemoteError::already_exists(name));
        }
        let record = RemoteRecord::builder()
            .name(name.to_string())
            .url(url.to_string())
            .fetch_refspecs(vec![default_fetch_refspec(name)])
            .build();
        remotes.push(record.clone());
        Ok(record)
    }

    fn create_anonymous_remote(&self, url: &str) -> RemoteResult<RemoteRecord> {
        Ok(RemoteRecord::builder().url(url.to_string()).build())
    }

    fn delete_remote(&self, name: &str) -> RemoteResult<()> {
        let mut remotes = self.remotes();
        let index = remotes
            .iter()
            .position(|r| r.name.as_deref() == Some(name))
            .ok_or_else(|| RemoteError::not_found(name))?;
        remotes.remove(index);
        Ok(())
    }

    fn rename_remote(&self, old_name: &str, new_name: &str) -> RemoteResult<()> {
        let mut remotes = self.remotes();
        if remotes.iter().any(|r| r.name.as_deref() == Some(new_name)) {
            return Err(RemoteError::already_exists(new_name));
        }
        let record = remotes
            .iter_mut()
            .find(|r| r.name.as_deref() == Some(old_name))
            .ok_or_else(|| RemoteError::not_found(old_name))?;

        let old_refspec = default_fetch_refspec(old_name);
        record.name = Some(new_name.to_string());
        for spec in &mut record.fetch_refspecs {
            if *spec == old_refspec {
                *spec = default_fetch_refspec(new_name);
            }
        }
        Ok(())
    }

    fn set_remote_url(&self, name: &str, url: &str) -> RemoteResult<()> {
        self.with_remote(name, |r| r.url = url.to_string())
    }

    fn set_remote_push_url(&self, name: &str, url: &str) -> RemoteResult<()> {
        self.with_remote(name, |r| r.push_url = Some(url.to_string()))
    }
}
