// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            list / add / rename ..
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         registry          |
//!              |  create lookup delete     |
//!              |  each each_name remotes   |
//!              '-------------+-------------'
//!                            v
//!                  repository (liveness)
//!                            v
//!              ,---------------------------,
//!              |     store: ConfigStore    |
//!              |  git: gix reads, CLI      |
//!              |       writes              |
//!              |  memory: in-process       |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  remote   handle, target, validation    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, config    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod remote;
pub mod repository;
pub mod store;
