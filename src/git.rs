//! Git command runner for minamo.
//!
//! Provides a thin wrapper around git commands with captured stdout/stderr.
//! minamo only asks git one question: which commit is the project at.

use crate::error::{MinamoError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(MinamoError::RevisionError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            MinamoError::RevisionError(format!(
                "failed to execute git {} in '{}': {}",
                args.first().unwrap_or(&""),
                cwd.display(),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(MinamoError::RevisionError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the commit the project is checked out at (`git rev-parse HEAD`).
///
/// Surrounding newlines are stripped.
pub fn head_revision<P: AsRef<Path>>(project_dir: P) -> Result<String> {
    let output = run_git(project_dir, &["rev-parse", "HEAD"])?;
    Ok(output.stdout.trim_matches(['\n', '\r']).to_string())
}
