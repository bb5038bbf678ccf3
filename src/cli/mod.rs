// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for remotes-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! remotes [global options] <command>
//! version | options | inis
//! list [--json] | names | show NAME
//! add NAME URL | probe URL
//! remove NAME | rename OLD NEW
//! set-url [--push] NAME URL
//! ```

pub mod global;
pub mod remote;


use crate::cli::global::GlobalOptions;
use crate::cli::remote::{
    AddArgs, ListArgs, ProbeArgs, RemoveArgs, RenameArgs, SetUrlArgs, ShowArgs,
};
use clap::{Parser, Subcommand};

/// Git Remote Registry
///
/// Create, inspect, rename and delete the remotes of a git repository.
#[derive(Debug, Parser)]
#[command(
    name = "remotes",
    author,
    version,
    about = "Git Remote Registry",
    long_about = "remotes-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Manages the remotes stored in a git repository's configuration.\n\n\
                  `remotes list` shows every remote of the repository in the\n\
                  current directory. Use -C to operate on another repository.",
    after_help = "CONFIG FILES:\n\n\
                  remotes reads `remotes.toml` from the current directory if it\n\
                  exists. Additional files can be given with --ini and are loaded\n\
                  after it. REMOTES_<SECTION>__<KEY> environment variables and\n\
                  --set SECTION.KEY=VALUE override any file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    Inis,

    /// Lists remotes with their URLs.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Lists remote names only.
    Names,

    /// Shows one remote in detail.
    Show(ShowArgs),

    /// Adds a remote with the default fetch refspec.
    Add(AddArgs),

    /// Resolves a URL as an anonymous remote without saving it.
    Probe(ProbeArgs),

    /// Removes a remote.
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Renames a remote.
    Rename(RenameArgs),

    /// Changes the fetch or push URL of a remote.
    #[command(name = "set-url")]
    SetUrl(SetUrlArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
