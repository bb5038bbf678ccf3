// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Materialized remotes.
//!
//! ```text
//! ConfigStore --RemoteRecord--> RemoteHandle (owned copy, never refreshed)
//!
//! RemoteHandle
//!   name          Some("origin") | None (anonymous)
//!   url           fetch url
//!   push_url      only when distinct from url
//!   fetch_refspecs / push_refspecs
//! ```

pub mod validate;


use serde::Serialize;

use crate::store::RemoteRecord;

/// Fetch refspec written for every remote the registry creates.
#[must_use]
pub fn default_fetch_refspec(name: &str) -> String {
    format!("+refs/heads/*:refs/remotes/{name}/*")
}

/// Point-in-time copy of one remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteHandle {
    name: Option<String>,
    url: String,
    push_url: Option<String>,
    fetch_refspecs: Vec<String>,
    push_refspecs: Vec<String>,
}

impl RemoteHandle {
    /// Remote name, `None` for anonymous remotes.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Fetch URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Push URL, if configured separately from the fetch URL.
    #[must_use]
    pub fn push_url(&self) -> Option<&str> {
        self.push_url.as_deref()
    }

    /// URL used for pushing: the push URL if set, else the fetch URL.
    #[must_use]
    pub fn effective_push_url(&self) -> &str {
        self.push_url.as_deref().unwrap_or(&self.url)
    }

    #[must_use]
    pub fn fetch_refspecs(&self) -> &[String] {
        &self.fetch_refspecs
    }

    #[must_use]
    pub fn push_refspecs(&self) -> &[String] {
        &self.push_refspecs
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

impl From<RemoteRecord> for RemoteHandle {
    fn from(record: RemoteRecord) -> Self {
        let push_url = record.push_url.filter(|push| *push != record.url);
        Self {
            name: record.name,
            url: record.url,
            push_url,
            fetch_refspecs: record.fetch_refspecs,
            push_refspecs: record.push_refspecs,
        }
    }
}

/// What to delete: a remote by name, or the remote a handle refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteTarget {
    Name(String),
    Handle(RemoteHandle),
}

impl RemoteTarget {
    /// The name the store call will use, if there is one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Handle(handle) => handle.name(),
        }
    }
}

impl From<&str> for RemoteTarget {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RemoteTarget {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<RemoteHandle> for RemoteTarget {
    fn from(handle: RemoteHandle) -> Self {
        Self::Handle(handle)
    }
}

impl From<&RemoteHandle> for RemoteTarget {
    fn from(handle: &RemoteHandle) -> Self {
        Self::Handle(handle.clone())
    }
}
