//! Synchronous editor subprocess execution.
//!
//! Runs one process to completion with stdout and stderr merged into a
//! single stream, and reports how long it took.

use crate::error::MinamoError;
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Result of one editor invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Combined stdout/stderr. Always empty when `error` is set.
    pub output: String,
    /// Wall-clock time from spawn to exit (or to the spawn failure).
    pub elapsed: Duration,
    /// Why the invocation failed, if it did.
    pub error: Option<MinamoError>,
}

impl Invocation {
    /// Exit code 0 and no spawn error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Run `executable` with `args` in `working_dir` and wait for it to exit.
///
/// The child inherits this process's environment with `env_overrides`
/// layered on top; the parent environment is left untouched.
///
/// On failure the returned `output` is empty. For a non-zero exit the
/// captured stream is kept inside [`MinamoError::InvocationError`] so it
/// can still be shown to the user.
pub fn invoke<I, K, V>(
    executable: &Path,
    args: &[String],
    working_dir: &Path,
    env_overrides: I,
) -> Invocation
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut command = Command::new(executable);
    command
        .args(args)
        .current_dir(working_dir)
        .envs(env_overrides)
        .stdin(Stdio::null());

    log::info!(
        "running {} in '{}'",
        executable.display(),
        working_dir.display()
    );
    log::debug!("arguments: {:?}", args);

    let start = Instant::now();
    let result = run_combined(command);
    let elapsed = start.elapsed();

    match result {
        Ok((status, output)) if status.success() => {
            log::info!("{} finished in {:.2?}", executable.display(), elapsed);
            Invocation {
                output: String::from_utf8_lossy(&output).into_owned(),
                elapsed,
                error: None,
            }
        }
        Ok((status, output)) => {
            log::warn!(
                "{} failed after {:.2?} ({})",
                executable.display(),
                elapsed,
                status
            );
            Invocation {
                output: String::new(),
                elapsed,
                error: Some(MinamoError::InvocationError {
                    message: format!("'{}' exited with {}", executable.display(), status),
                    output: String::from_utf8_lossy(&output).into_owned(),
                }),
            }
        }
        Err(e) => Invocation {
            output: String::new(),
            elapsed,
            error: Some(MinamoError::InvocationError {
                message: format!("failed to run '{}': {}", executable.display(), e),
                output: String::new(),
            }),
        },
    }
}

/// Spawn `command` with stdout and stderr sharing one pipe and read it to EOF.
fn run_combined(mut command: Command) -> std::io::Result<(ExitStatus, Vec<u8>)> {
    let (mut reader, writer) = os_pipe::pipe()?;
    let writer_clone = writer.try_clone()?;
    command.stdout(writer).stderr(writer_clone);

    let mut child = command.spawn()?;
    // The command still holds the write ends; the read only sees EOF once they are closed.
    drop(command);

    let mut output = Vec::new();
    if let Err(e) = reader.read_to_end(&mut output) {
        // On Unix this is SIGKILL; on Windows it is TerminateProcess.
        let _ = child.kill();
        let _ = child.wait();
        return Err(e);
    }

    let status = child.wait()?;
    Ok((status, output))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    fn script(body: &str) -> Vec<String> {
        vec!["-c".to_string(), body.to_string()]
    }

    const NO_ENV: [(&str, &str); 0] = [];

    #[test]
    fn test_successful_command_returns_output() {
        let temp_dir = TempDir::new().unwrap();

        let result = invoke(&sh(), &script("echo hello"), temp_dir.path(), NO_ENV);

        assert!(result.is_success());
        assert_eq!(result.output, "hello\n");
        assert!(result.elapsed > Duration::ZERO);
    }

    #[test]
    fn test_stdout_and_stderr_are_combined() {
        let temp_dir = TempDir::new().unwrap();

        let result = invoke(
            &sh(),
            &script("echo one; echo two 1>&2; echo three"),
            temp_dir.path(),
            NO_ENV,
        );

        assert!(result.is_success());
        assert_eq!(result.output, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_nonzero_exit_discards_output() {
        let temp_dir = TempDir::new().unwrap();

        let result = invoke(
            &sh(),
            &script("echo partial; exit 3"),
            temp_dir.path(),
            NO_ENV,
        );

        assert!(!result.is_success());
        assert_eq!(result.output, "");
        assert!(result.elapsed > Duration::ZERO);
        match result.error {
            Some(MinamoError::InvocationError { message, output }) => {
                assert!(message.contains("exited with"), "message: {}", message);
                assert_eq!(output, "partial\n");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_executable_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("Contents/MacOS/Unity");

        let result = invoke(&missing, &[], temp_dir.path(), NO_ENV);

        assert!(!result.is_success());
        assert_eq!(result.output, "");
        assert!(result.elapsed > Duration::ZERO);
        let err = result.error.unwrap();
        assert!(err.to_string().contains("failed to run"));
    }

    #[test]
    fn test_env_overrides_are_added() {
        let temp_dir = TempDir::new().unwrap();

        let result = invoke(
            &sh(),
            &script("echo \"$MINAMO_TEST_VAR|$PATH\""),
            temp_dir.path(),
            [("MINAMO_TEST_VAR", "test_value")],
        );

        assert!(result.is_success());
        let (value, path) = result.output.trim_end().split_once('|').unwrap();
        assert_eq!(value, "test_value");
        // Inherited variables survive next to the overlay.
        assert!(!path.is_empty());
        assert!(std::env::var_os("MINAMO_TEST_VAR").is_none());
    }

    #[test]
    fn test_working_directory_is_applied() {
        let temp_dir = TempDir::new().unwrap();
        let expected = dunce::canonicalize(temp_dir.path()).unwrap();

        let result = invoke(&sh(), &script("pwd -P"), &expected, NO_ENV);

        assert!(result.is_success());
        assert_eq!(PathBuf::from(result.output.trim_end()), expected);
    }

    #[test]
    fn test_large_output_does_not_block() {
        let temp_dir = TempDir::new().unwrap();

        // Well past a pipe buffer on both streams.
        let result = invoke(
            &sh(),
            &script("i=0; while [ $i -lt 20000 ]; do echo out$i; echo err$i 1>&2; i=$((i+1)); done"),
            temp_dir.path(),
            NO_ENV,
        );

        assert!(result.is_success());
        assert_eq!(result.output.lines().count(), 40000);
    }
}
