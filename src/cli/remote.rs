// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command arguments.
//!
//! ```text
//! list [--json]          every remote, snapshot order
//! show NAME              one remote, all fields
//! add NAME URL           persist with default refspec
//! probe URL              anonymous, never persisted
//! remove NAME
//! rename OLD NEW
//! set-url [--push] NAME URL
//! ```

use clap::Args;

/// Arguments for the `list` command.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Print remotes as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Remote name.
    pub name: String,

    /// Print the remote as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Remote name.
    pub name: String,

    /// Remote URL.
    pub url: String,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Args)]
pub struct ProbeArgs {
    /// URL to resolve.
    pub url: String,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Remote name.
    pub name: String,
}

/// Arguments for the `rename` command.
#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// Current remote name.
    pub old_name: String,

    /// New remote name.
    pub new_name: String,
}

/// Arguments for the `set-url` command.
#[derive(Debug, Clone, Args)]
pub struct SetUrlArgs {
    /// Change the push URL instead of the fetch URL.
    #[arg(long)]
    pub push: bool,

    /// Remote name.
    pub name: String,

    /// New URL.
    pub url: String,
}
