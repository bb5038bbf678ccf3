// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command handlers.
//!
//! ```text
//! list    each()       name<TAB>url (fetch) / (push)
//! names   each_name()  one name per line
//! show    lookup()     key: value lines
//! add | probe | remove | rename | set-url
//! ```
//!
//! Handlers write to the given writer so they can run against any store.

use std::io::{self, Write};
use std::ops::ControlFlow;

use anyhow::{Context, anyhow};

use crate::cli::remote::{
    AddArgs, ListArgs, ProbeArgs, RemoveArgs, RenameArgs, SetUrlArgs, ShowArgs,
};
use crate::error::Result;
use crate::registry::RemoteRegistry;
use crate::remote::RemoteHandle;
use crate::store::ConfigStore;

fn write_remote_lines(out: &mut impl Write, remote: &RemoteHandle) -> io::Result<()> {
    let name = remote.name().unwrap_or("(anonymous)");
    writeln!(out, "{name}\t{} (fetch)", remote.url())?;
    writeln!(out, "{name}\t{} (push)", remote.effective_push_url())
}

/// List every remote with its fetch and push URL.
///
/// # Errors
///
/// Returns an error if the registry fails or output cannot be written.
pub fn run_list_command<S: ConfigStore>(
    args: &ListArgs,
    registry: &RemoteRegistry<S>,
    out: &mut impl Write,
) -> Result<()> {
    if args.json {
        let remotes = registry
            .remotes()
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        serde_json::to_writer_pretty(&mut *out, &remotes)?;
        writeln!(out)?;
        return Ok(());
    }

    let flow = registry.each(|remote| match write_remote_lines(out, &remote) {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => ControlFlow::Break(e),
    })?;
    if let ControlFlow::Break(e) = flow {
        return Err(e).context("failed to write remote list");
    }
    Ok(())
}

/// Print every remote name, one per line.
///
/// # Errors
///
/// Returns an error if the registry fails or output cannot be written.
pub fn run_names_command<S: ConfigStore>(
    registry: &RemoteRegistry<S>,
    out: &mut impl Write,
) -> Result<()> {
    let flow = registry.each_name(|name| match writeln!(out, "{name}") {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => ControlFlow::Break(e),
    })?;
    if let ControlFlow::Break(e) = flow {
        return Err(e).context("failed to write remote names");
    }
    Ok(())
}

/// Print one remote in detail.
///
/// # Errors
///
/// Returns an error if the remote does not exist or the registry fails.
pub fn run_show_command<S: ConfigStore>(
    args: &ShowArgs,
    registry: &RemoteRegistry<S>,
    out: &mut impl Write,
) -> Result<()> {
    let remote = registry
        .lookup(&args.name)?
        .ok_or_else(|| anyhow!("no such remote '{}'", args.name))?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &remote)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "name: {}", args.name)?;
    writeln!(out, "url: {}", remote.url())?;
    writeln!(out, "push_url: {}", remote.effective_push_url())?;
    for refspec in remote.fetch_refspecs() {
        writeln!(out, "fetch: {refspec}")?;
    }
    for refspec in remote.push_refspecs() {
        writeln!(out, "push: {refspec}")?;
    }
    Ok(())
}

/// Add a remote.
///
/// # Errors
///
/// Returns an error if the name or URL is invalid or the name is taken.
pub fn run_add_command<S: ConfigStore>(
    args: &AddArgs,
    registry: &RemoteRegistry<S>,
    out: &mut impl Write,
) -> Result<()> {
    let remote = registry.create(&args.name, &args.url)?;
    write_remote_lines(out, &remote)?;
    Ok(())
}

/// Resolve a URL as an anonymous remote. Nothing is persisted.
///
/// # Errors
///
/// Returns an error if the URL is invalid.
pub fn run_probe_command<S: ConfigStore>(
    args: &ProbeArgs,
    registry: &RemoteRegistry<S>,
    out: &mut impl Write,
) -> Result<()> {
    let remote = registry.create_anonymous(&args.url)?;
    write_remote_lines(out, &remote)?;
    Ok(())
}

/// Remove a remote.
///
/// # Errors
///
/// Returns an error if the remote does not exist.
pub fn run_remove_command<S: ConfigStore>(
    args: &RemoveArgs,
    registry: &RemoteRegistry<S>,
) -> Result<()> {
    registry.delete(args.name.as_str())?;
    Ok(())
}

/// Rename a remote.
///
/// # Errors
///
/// Returns an error if the old name is missing or the new name is taken.
pub fn run_rename_command<S: ConfigStore>(
    args: &RenameArgs,
    registry: &RemoteRegistry<S>,
    out: &mut impl Write,
) -> Result<()> {
    let remote = registry.rename(&args.old_name, &args.new_name)?;
    write_remote_lines(out, &remote)?;
    Ok(())
}

/// Change the fetch URL, or the push URL with `--push`.
///
/// # Errors
///
/// Returns an error if the remote does not exist or the URL is invalid.
pub fn run_set_url_command<S: ConfigStore>(
    args: &SetUrlArgs,
    registry: &RemoteRegistry<S>,
) -> Result<()> {
    if args.push {
        registry.set_push_url(&args.name, &args.url)?;
    } else {
        registry.set_url(&args.name, &args.url)?;
    }
    Ok(())
}
