//! Editor command-line arguments.
//!
//! Unity's argument parser is flag/value based, so the order is fixed:
//! batch flags, project, optional log file, and `-executeMethod` last.

use crate::config::Config;
use crate::paths;

pub const QUIT_FLAG: &str = "-quit";
pub const BATCH_MODE_FLAG: &str = "-batchmode";
pub const NO_GRAPHICS_FLAG: &str = "-nographics";
pub const PROJECT_PATH_FLAG: &str = "-projectPath";
pub const LOG_FILE_FLAG: &str = "-logFile";
pub const EXECUTE_METHOD_FLAG: &str = "-executeMethod";

/// Headless arguments for opening the configured project.
///
/// `-logFile` is omitted when the log target is the editor default.
pub fn build_args(config: &Config) -> Vec<String> {
    let project = paths::resolve(config.project_path());

    let mut args = vec![
        QUIT_FLAG.to_string(),
        BATCH_MODE_FLAG.to_string(),
        NO_GRAPHICS_FLAG.to_string(),
        PROJECT_PATH_FLAG.to_string(),
        project.to_string_lossy().into_owned(),
    ];

    if let Some(log_file) = config.log_file().editor_value() {
        args.push(LOG_FILE_FLAG.to_string());
        args.push(log_file);
    }

    args
}

/// [`build_args`] followed by `-executeMethod <method>`.
pub fn build_execute_args(config: &Config, method: &str) -> Vec<String> {
    let mut args = build_args(config);
    args.push(EXECUTE_METHOD_FLAG.to_string());
    args.push(method.to_string());
    args
}
