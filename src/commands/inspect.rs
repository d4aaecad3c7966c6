//! Implementation of the `minamo path` and `minamo args` commands.
//!
//! Both only compute and print; nothing is created and the editor is not
//! started.

use crate::cli::ArgsArgs;
use crate::config::Config;
use crate::editor::{Platform, build_execute_args, locate_executable};
use crate::error::Result;
use crate::output::build_path;

/// Execute the `minamo path` command.
pub fn cmd_path(config: &Config) -> Result<()> {
    println!("{}", build_path(config).display());
    Ok(())
}

/// Execute the `minamo args` command.
///
/// Prints the editor executable and its arguments as one shell-quoted line
/// that can be pasted into a terminal.
pub fn cmd_args(config: &Config, args: &ArgsArgs) -> Result<()> {
    let method = args.method.as_deref().unwrap_or(config.method());
    println!("{}", command_line(config, &Platform::current(), method));
    Ok(())
}

fn command_line(config: &Config, platform: &Platform, method: &str) -> String {
    let executable = locate_executable(config.unity_path(), platform);

    let mut words = vec![executable.to_string_lossy().into_owned()];
    words.extend(build_execute_args(config, method));
    shell_words::join(words)
}
