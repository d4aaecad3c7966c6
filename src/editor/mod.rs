//! Unity editor invocation.
//!
//! This module provides:
//!
//! - **Locator**: install directory + platform → editor executable
//! - **Args**: the batch-mode command line
//! - **Invoker**: synchronous subprocess execution with combined output
//!
//! [`execute`] and [`execute_method`] tie these together for one config
//! snapshot. The child process sees two extra environment variables,
//! [`CONFIG_PATH_ENV`] and [`OUTPUT_PATH_ENV`], so editor scripts can find
//! the config file and the build output directory without parsing the
//! command line.

mod args;
mod invoker;
mod locator;

pub use args::{
    BATCH_MODE_FLAG, EXECUTE_METHOD_FLAG, LOG_FILE_FLAG, NO_GRAPHICS_FLAG, PROJECT_PATH_FLAG,
    QUIT_FLAG, build_args, build_execute_args,
};
pub use invoker::{Invocation, invoke};
pub use locator::{EDITOR_EXECUTABLE, Platform, locate_executable};

use crate::config::Config;
use crate::output::build_path;
use crate::paths;
use std::ffi::OsString;

/// Absolute path of the config file, as seen by the editor.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Absolute build output path, as seen by the editor.
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";

/// Run the method configured under `method`.
pub fn execute(config: &Config, platform: &Platform) -> Invocation {
    execute_method(config, platform, config.method())
}

/// Run `method` in the editor for this config.
///
/// The editor is started in the project directory.
///
/// # Panics
///
/// On an unsupported platform, see [`locate_executable`].
pub fn execute_method(config: &Config, platform: &Platform, method: &str) -> Invocation {
    let executable = locate_executable(config.unity_path(), platform);
    let args = build_execute_args(config, method);
    let project = paths::resolve(config.project_path());

    invoke(&executable, &args, &project, editor_env(config))
}

/// Variables layered over the inherited environment of the editor process.
pub fn editor_env(config: &Config) -> [(&'static str, OsString); 2] {
    [
        (CONFIG_PATH_ENV, config.file_path().as_os_str().to_owned()),
        (OUTPUT_PATH_ENV, build_path(config).into_os_string()),
    ]
}
