//! Command implementations for minamo.
//!
//! This module provides the dispatcher that loads the config snapshot once
//! and routes CLI commands to their implementations.

mod build;
mod inspect;

use crate::cli::{Cli, Command};
use crate::config::{Config, LoadedConfig, LogFile};
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// The config file is read and resolved before any command runs, so a bad
/// config fails fast regardless of the subcommand.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config, &cli.log_file, cli.require_revision)?;

    match cli.command {
        Command::Build(args) => build::cmd_build(&config, &args),
        Command::Exec(args) => build::cmd_exec(&config, &args),
        Command::Path => inspect::cmd_path(&config),
        Command::Args(args) => inspect::cmd_args(&config, &args),
    }
}

/// Load the snapshot, deciding what a failed revision lookup means.
///
/// Without `require_revision` the failure is logged and the run continues
/// with an empty revision.
fn load_config(config_path: &str, log_file: &str, require_revision: bool) -> Result<Config> {
    let LoadedConfig {
        config,
        revision_error,
    } = Config::load(config_path, LogFile::parse(log_file))?;

    if let Some(err) = revision_error {
        if require_revision {
            return Err(err);
        }
        log::warn!("{}; continuing with an empty revision", err);
    }

    Ok(config)
}
