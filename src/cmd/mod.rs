// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config: options, inis
//!   remote: list, names, show, add, probe, remove, rename, set-url
//! ```

pub mod config;
pub mod remote;
