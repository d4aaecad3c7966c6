//! Exit code constants for the minamo CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed config)
//! - 2: Editor invocation failure (spawn error or non-zero exit)
//! - 3: Revision lookup failure (only fatal with `--require-revision`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or malformed configuration.
pub const USER_ERROR: i32 = 1;

/// The editor could not be started or exited with a non-zero status.
pub const INVOCATION_FAILURE: i32 = 2;

/// `git rev-parse HEAD` failed in the project directory.
pub const REVISION_FAILURE: i32 = 3;
