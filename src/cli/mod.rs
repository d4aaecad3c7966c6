//! CLI argument parsing for minamo.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::DEFAULT_LOG_FILE;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Minamo: drive headless Unity editor builds from a config file.
///
/// The config file names the editor install, the project, and a build
/// output template such as `{platform}/{yyyy}{MM}{dd}/build`. Minamo
/// expands the template, starts the editor in batch mode and reports
/// how long it ran.
#[derive(Parser, Debug)]
#[command(name = "minamo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Build config file (JSON, or YAML by `.yaml`/`.yml` extension).
    #[arg(short, long, value_name = "PATH")]
    pub config: String,

    /// Editor log file. `default` lets the editor choose, an empty value
    /// (or `-`) sends the log to stdout.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Fail when the project revision cannot be determined.
    #[arg(long)]
    pub require_revision: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for minamo.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the method configured in the config file.
    Build(BuildArgs),

    /// Run an explicit editor method instead of the configured one.
    Exec(ExecArgs),

    /// Print the resolved build output path.
    Path,

    /// Print the editor command line without running it.
    Args(ArgsArgs),
}

/// Options shared by commands that start the editor.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Append an NDJSON record of the run to this file.
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Create the build output directory before starting the editor.
    #[arg(long)]
    pub mkdir: bool,
}

/// Arguments for the `exec` command.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Static method to run, e.g. `BuildScript.PerformBuild`.
    pub method: String,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Arguments for the `args` command.
#[derive(Args, Debug)]
pub struct ArgsArgs {
    /// Show the command line for this method instead of the configured one.
    #[arg(long)]
    pub method: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
