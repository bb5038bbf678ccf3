// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | List | Names | Show
//!   Add | Probe | Remove | Rename | SetUrl
//! ```

use std::io;
use std::process::ExitCode;

use remotes_rs::cli::global::GlobalOptions;
use remotes_rs::cli::{self, Command};
use remotes_rs::cmd::config::{run_inis_command, run_options_command};
use remotes_rs::cmd::remote::{
    run_add_command, run_list_command, run_names_command, run_probe_command, run_remove_command,
    run_rename_command, run_set_url_command, run_show_command,
};
use remotes_rs::config::loader::ConfigLoader;
use remotes_rs::config::{Config, LOCAL_CONFIG_FILE};
use remotes_rs::error::Result;
use remotes_rs::logging::{LogConfig, init_logging};
use remotes_rs::registry::RemoteRegistry;
use remotes_rs::repository::Repository;
use remotes_rs::store::GitConfigStore;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_file(config.global.log_json)
        .with_show_timestamps(config.global.log_timestamps)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::List(args)) => {
            open_registry(config).and_then(|r| run_list_command(args, &r, &mut stdout))
        }
        Some(Command::Names) => {
            open_registry(config).and_then(|r| run_names_command(&r, &mut stdout))
        }
        Some(Command::Show(args)) => {
            open_registry(config).and_then(|r| run_show_command(args, &r, &mut stdout))
        }
        Some(Command::Add(args)) => {
            open_registry(config).and_then(|r| run_add_command(args, &r, &mut stdout))
        }
        Some(Command::Probe(args)) => {
            open_registry(config).and_then(|r| run_probe_command(args, &r, &mut stdout))
        }
        Some(Command::Remove(args)) => {
            open_registry(config).and_then(|r| run_remove_command(args, &r))
        }
        Some(Command::Rename(args)) => {
            open_registry(config).and_then(|r| run_rename_command(args, &r, &mut stdout))
        }
        Some(Command::SetUrl(args)) => {
            open_registry(config).and_then(|r| run_set_url_command(args, &r))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("REMOTES")
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)
        .apply_overrides(&global.to_config_overrides())?
        .build()
}

fn open_registry(config: &Config) -> Result<RemoteRegistry<GitConfigStore>> {
    let repo = Repository::open(&config.repository.path)?;
    Ok(RemoteRegistry::new(repo))
}
